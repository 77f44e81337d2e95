use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Evaluate plain arithmetic, or answer chat messages that contain some
#[derive(Parser, Debug)]
#[command(name = "arith", version)]
pub struct CliArgs {
    /// Expression (or message with --route) to evaluate; starts a REPL when empty
    pub input: Vec<String>,

    /// Treat input as chat messages and print the routed reply
    #[arg(short, long)]
    pub route: bool,

    /// REPL history file (default: ~/.arith_history)
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Don't load or save REPL history
    #[arg(long, conflicts_with = "history")]
    pub no_history: bool,

    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

impl CliArgs {
    pub fn history_path(&self) -> Option<PathBuf> {
        if self.no_history {
            return None;
        }
        self.history
            .clone()
            .or_else(|| dirs::home_dir().map(|h| h.join(".arith_history")))
    }
}

pub fn init_logging(log_level: &LogLevel) {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
}
