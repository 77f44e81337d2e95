use std::fmt;
use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::calc::evaluate;

pub const GREETING_REPLY: &str =
    "My neural circuits are functioning perfectly. How can I assist you with your code today?";

static GREETINGS: &[&str] = &["hello", "hi", "how are you", "how are you?"];

fn math_pattern() -> &'static Regex {
    static MATH: OnceLock<Regex> = OnceLock::new();
    MATH.get_or_init(|| Regex::new(r"\d+\s*[+\-*/]\s*\d+").expect("math pattern is valid"))
}

/// How an inbound chat message should be answered.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// The message held arithmetic that evaluated to this value.
    Exact(String),
    /// A fixed answer, no generation needed.
    Canned(&'static str),
    /// Nothing deterministic applies; hand the message to a generative model.
    Generate,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Reply::Exact(value) => write!(f, "The exact answer is {}.", value),
            Reply::Canned(text) => write!(f, "{}", text),
            Reply::Generate => Ok(()),
        }
    }
}

/// First `<digits> <op> <digits>` run in the message, if any.
pub fn extract_math(message: &str) -> Option<&str> {
    math_pattern().find(message).map(|m| m.as_str())
}

pub fn route(message: &str) -> Reply {
    if let Some(expr) = extract_math(message) {
        match evaluate(expr) {
            Some(value) => return Reply::Exact(value),
            None => debug!("{:?} looked like math but has no result", expr),
        }
    }
    let lower = message.trim().to_lowercase();
    if GREETINGS.contains(&lower.as_str()) {
        return Reply::Canned(GREETING_REPLY);
    }
    Reply::Generate
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_binary_run() {
        assert_eq!(extract_math("what is 12 * 3?"), Some("12 * 3"));
        assert_eq!(extract_math("7+8 then 1-1"), Some("7+8"));
        assert_eq!(extract_math("(2+3)*4"), Some("2+3"));
        assert_eq!(extract_math("no numbers here"), None);
        assert_eq!(extract_math("just 42"), None);
    }

    #[test]
    fn math_wins() {
        assert_eq!(route("what is 12 * 3?"), Reply::Exact("36".to_string()));
        assert_eq!(route("hi, 9 / 2"), Reply::Exact("4.5".to_string()));
        assert_eq!(
            route("compute 6/3").to_string(),
            "The exact answer is 2."
        );
    }

    #[test]
    fn failed_math_falls_through() {
        assert_eq!(route("what is 10 / 0"), Reply::Generate);
    }

    #[test]
    fn greetings() {
        assert_eq!(route("  Hello "), Reply::Canned(GREETING_REPLY));
        assert_eq!(route("How are you?"), Reply::Canned(GREETING_REPLY));
        assert_eq!(route("hello there"), Reply::Generate);
    }

    #[test]
    fn everything_else_generates() {
        assert_eq!(route("write me a poem"), Reply::Generate);
        assert_eq!(route(""), Reply::Generate);
        assert_eq!(Reply::Generate.to_string(), "");
    }
}
