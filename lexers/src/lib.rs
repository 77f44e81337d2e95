mod scanner;
mod char_scanner;
mod arith_tokenizer;

pub use scanner::Scanner;
pub use arith_tokenizer::{ArithToken, ArithTokenizer};
