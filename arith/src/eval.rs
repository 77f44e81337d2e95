use log::trace;
use thiserror::Error;

use crate::ast::{BinOp, Node, UnOp};

#[derive(Error, Debug, PartialEq)]
pub enum EvalErr {
    #[error("division by zero")]
    DivisionByZero,
    #[error("result is not a finite number")]
    NotFinite,
}

impl Node {
    /// Reduces the tree to a single value.
    ///
    /// A zero divisor (including `0 ^ negative`) is an error rather than an
    /// infinity, and so is any result that overflows or is NaN.
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let value = match self {
            Node::Literal(n) => *n,
            Node::UnaryOp(op, operand) => {
                let o = operand.eval()?;
                match op {
                    UnOp::Plus => o,
                    UnOp::Minus => -o,
                }
            }
            Node::BinaryOp(op, lhs, rhs) => {
                let l = lhs.eval()?;
                let r = rhs.eval()?;
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div if r == 0.0 => return Err(EvalErr::DivisionByZero),
                    BinOp::Div => l / r,
                    BinOp::Pow if l == 0.0 && r < 0.0 => return Err(EvalErr::DivisionByZero),
                    BinOp::Pow => l.powf(r),
                }
            }
        };
        if !value.is_finite() {
            trace!("{} does not evaluate to a finite number", self);
            return Err(EvalErr::NotFinite);
        }
        Ok(value)
    }
}

/// Renders a value in its shortest round-trip form, integral values
/// without a fractional part. Negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
