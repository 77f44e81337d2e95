#![deny(warnings)]

use crate::scanner::Scanner;

#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Unknown(String),
    Number(f64),
    Op(char), // one of + - * / ^
    Pow,      // '**', same operator as '^'
    OParen,
    CParen,
}

pub struct ArithTokenizer<I: Iterator<Item = char>> {
    src: Scanner<I>,
}

impl<I: Iterator<Item = char>> ArithTokenizer<I> {
    pub fn new(source: I) -> Self {
        ArithTokenizer { src: Scanner::new(source) }
    }

    pub fn scanner(source: I) -> Scanner<Self> {
        Scanner::new(Self::new(source))
    }

    fn get_token(&mut self) -> Option<ArithToken> {
        self.src.ignore_ws();
        if let Some(op) = self.src.scan_arith_op() {
            match op.as_str() {
                "(" => Some(ArithToken::OParen),
                ")" => Some(ArithToken::CParen),
                "**" => Some(ArithToken::Pow),
                _ => op.chars().next().map(ArithToken::Op),
            }
        } else if let Some(num) = self.src.scan_decimal() {
            match num.parse::<f64>() {
                Ok(n) => Some(ArithToken::Number(n)),
                Err(_) => Some(ArithToken::Unknown(num)),
            }
        } else if self.src.next().is_some() {
            Some(ArithToken::Unknown(self.src.extract_string()))
        } else {
            None
        }
    }
}

impl<I: Iterator<Item = char>> Iterator for ArithTokenizer<I> {
    type Item = ArithToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.get_token()
    }
}

///////////////////////////////////////////////////////////////////////////////
