use log::{debug, trace};
use thiserror::Error;

use crate::eval::{format_number, EvalErr};
use crate::parser::{parse_str, ParseError};
use crate::sanitize::sanitize;

#[derive(Error, Debug, PartialEq)]
pub(crate) enum CalcError {
    #[error("nothing left after sanitizing")]
    NothingToEvaluate,
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("eval error: {0}")]
    Eval(#[from] EvalErr),
}

pub(crate) fn calculate(raw_text: &str) -> Result<f64, CalcError> {
    let expr = sanitize(raw_text);
    if expr.is_empty() {
        return Err(CalcError::NothingToEvaluate);
    }
    let tree = parse_str(&expr)?;
    trace!("{:?} parsed as {}", expr, tree);
    Ok(tree.eval()?)
}

/// Evaluates the arithmetic left in `raw_text` after sanitizing it.
///
/// Every failure (nothing to evaluate, malformed syntax, division by zero,
/// overflow) yields `None`; callers are expected to fall back to some
/// other way of answering.
pub fn evaluate(raw_text: &str) -> Option<String> {
    match calculate(raw_text) {
        Ok(value) => Some(format_number(value)),
        Err(e) => {
            debug!("no result for {:?}: {}", raw_text, e);
            None
        }
    }
}
