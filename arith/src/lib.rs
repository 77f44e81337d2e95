extern crate lexers;

pub use ast::{BinOp, Node, UnOp};
pub use calc::evaluate;
pub use eval::{format_number, EvalErr};
pub use parser::{parse_str, ParseError, Parser, MAX_DEPTH, MAX_OPERANDS};
pub use router::{extract_math, route, Reply, GREETING_REPLY};
pub use sanitize::{sanitize, ALLOWED};

mod ast;
mod calc;
mod eval;
mod parser;
mod router;
mod sanitize;

#[cfg(test)]
mod calc_test;
