mod cli;

mod repl {
    use arith::{evaluate, route, Reply};

    pub fn evalexpr(input: &str) {
        match evaluate(input) {
            Some(result) => println!("{}", result),
            None => println!("no result"),
        }
    }

    pub fn answer(message: &str) {
        match route(message) {
            Reply::Generate => println!("(no deterministic answer, needs a generative model)"),
            reply => println!("{}", reply),
        }
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rustyline::error::ReadlineError;

fn run() -> Result<()> {
    let args = cli::CliArgs::parse();
    cli::init_logging(&args.log_level);

    let handle: fn(&str) = if args.route { repl::answer } else { repl::evalexpr };
    if !args.input.is_empty() {
        handle(&args.input.join(" "));
        return Ok(());
    }

    let histpath = args.history_path();
    let mut rl = rustyline::DefaultEditor::new().context("cannot start line editor")?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            info!("no history yet at {}", path.display());
        }
    }
    loop {
        match rl.readline(">> ") {
            Ok(input) => {
                if input.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(input.as_str())?;
                handle(&input);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("reading input"),
        }
    }
    if let Some(path) = &histpath {
        if let Err(e) = rl.save_history(path) {
            warn!("could not save history to {}: {}", path.display(), e);
        }
    }
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
