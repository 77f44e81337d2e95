use crate::calc::{calculate, evaluate, CalcError};
use crate::eval::EvalErr;
use crate::parser::ParseError;

#[test]
fn results() {
    assert_eq!(evaluate("2+2"), Some("4".to_string()));
    assert_eq!(evaluate("2*(3+4)"), Some("14".to_string()));
    assert_eq!(evaluate("2^3"), Some("8".to_string()));
    assert_eq!(evaluate("2**3"), Some("8".to_string()));
    assert_eq!(evaluate("7/2"), Some("3.5".to_string()));
    assert_eq!(evaluate("what's 12 x 3?"), Some("123".to_string()));
    assert_eq!(evaluate(" 1 + 2 * 3 "), Some("7".to_string()));
    assert_eq!(evaluate("-0*5"), Some("0".to_string()));
}

#[test]
fn no_results() {
    assert_eq!(evaluate("10/0"), None);
    assert_eq!(evaluate("hello"), None);
    assert_eq!(evaluate("1+"), None);
    assert_eq!(evaluate("(1+2"), None);
    assert_eq!(evaluate(""), None);
    assert_eq!(evaluate("10^400"), None);
}

#[test]
fn failures_keep_their_reason_internally() {
    assert_eq!(calculate("hello"), Err(CalcError::NothingToEvaluate));
    assert_eq!(calculate("1+"), Err(CalcError::Parse(ParseError::UnexpectedEnd)));
    assert_eq!(calculate("1/0"), Err(CalcError::Eval(EvalErr::DivisionByZero)));
}

#[test]
fn idempotent() {
    for expr in ["2+2", "1/3", "bad(", "9^9^9"] {
        assert_eq!(evaluate(expr), evaluate(expr));
    }
}

#[test]
fn concurrent_callers() {
    let handles: Vec<_> = (0..8)
        .map(|i| std::thread::spawn(move || evaluate(&format!("{}*{}", i, i))))
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), Some((i * i).to_string()));
    }
}
