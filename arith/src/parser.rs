use lexers::{ArithToken, ArithTokenizer, Scanner};
use thiserror::Error;

use crate::ast::{BinOp, Node, UnOp};

/// Deepest nesting of parens, unary signs and exponent chains accepted.
pub const MAX_DEPTH: usize = 128;
/// Most literals/groups a single expression may hold.
pub const MAX_OPERANDS: usize = 1024;

#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("missing closing paren")]
    MissingCParen,
    #[error("missing opening paren")]
    MissingOParen,
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unexpected token: {0}")]
    UnexpectedToken(String),
    #[error("bad token: {0}")]
    BadToken(String),
    #[error("expression nested deeper than {} levels", MAX_DEPTH)]
    TooDeep,
    #[error("expression has more than {} operands", MAX_OPERANDS)]
    TooLong,
}

type ParseResult = Result<Node, ParseError>;

pub fn parse_str(expr: &str) -> ParseResult {
    Parser::new(ArithTokenizer::new(expr.chars())).parse()
}

/// Recursive descent over
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := power (('*' | '/') power)*
/// power   := unary ('^' power)?
/// unary   := ('+' | '-') unary | primary
/// primary := NUMBER | '(' expr ')'
/// ```
pub struct Parser<I: Iterator<Item = ArithToken>> {
    tokens: Scanner<I>,
    depth: usize,
    operands: usize,
}

impl<I: Iterator<Item = ArithToken>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser { tokens: Scanner::new(tokens), depth: 0, operands: 0 }
    }

    pub fn parse(mut self) -> ParseResult {
        if self.tokens.peek().is_none() {
            return Err(ParseError::Empty);
        }
        let node = self.expr()?;
        match self.tokens.next() {
            None => Ok(node),
            Some(ArithToken::CParen) => Err(ParseError::MissingOParen),
            Some(token) => Err(Self::unexpected(token)),
        }
    }

    fn unexpected(token: ArithToken) -> ParseError {
        match token {
            ArithToken::Unknown(lexeme) => ParseError::BadToken(lexeme),
            ArithToken::Number(n) => ParseError::UnexpectedToken(n.to_string()),
            ArithToken::Op(op) => ParseError::UnexpectedToken(op.to_string()),
            ArithToken::Pow => ParseError::UnexpectedToken("**".to_string()),
            ArithToken::OParen => ParseError::UnexpectedToken("(".to_string()),
            ArithToken::CParen => ParseError::UnexpectedToken(")".to_string()),
        }
    }

    fn accept_op(&mut self, ops: &[char]) -> Option<char> {
        let backtrack = self.tokens.buffer_pos();
        match self.tokens.next() {
            Some(ArithToken::Op(op)) if ops.contains(&op) => {
                self.tokens.ignore();
                Some(op)
            }
            _ => {
                self.tokens.set_buffer_pos(backtrack);
                None
            }
        }
    }

    fn accept_pow(&mut self) -> bool {
        if self.tokens.accept(&ArithToken::Pow).is_some() {
            self.tokens.ignore();
            return true;
        }
        self.accept_op(&['^']).is_some()
    }

    // run a rule one level deeper, refusing to recurse past MAX_DEPTH
    fn nested(&mut self, rule: fn(&mut Self) -> ParseResult) -> ParseResult {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }
        self.depth += 1;
        let node = rule(self);
        self.depth -= 1;
        node
    }

    fn expr(&mut self) -> ParseResult {
        let mut lhs = self.term()?;
        while let Some(op) = self.accept_op(&['+', '-']) {
            let rhs = self.term()?;
            lhs = Node::binary(Self::binop(op)?, lhs, rhs);
        }
        Ok(lhs)
    }

    fn term(&mut self) -> ParseResult {
        let mut lhs = self.power()?;
        while let Some(op) = self.accept_op(&['*', '/']) {
            let rhs = self.power()?;
            lhs = Node::binary(Self::binop(op)?, lhs, rhs);
        }
        Ok(lhs)
    }

    fn power(&mut self) -> ParseResult {
        let base = self.unary()?;
        if self.accept_pow() {
            let exponent = self.nested(Self::power)?;
            return Ok(Node::binary(BinOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> ParseResult {
        match self.accept_op(&['+', '-']).and_then(UnOp::from_char) {
            Some(op) => {
                let operand = self.nested(Self::unary)?;
                Ok(Node::unary(op, operand))
            }
            None => self.primary(),
        }
    }

    fn primary(&mut self) -> ParseResult {
        self.operands += 1;
        if self.operands > MAX_OPERANDS {
            return Err(ParseError::TooLong);
        }
        let token = self.tokens.next();
        self.tokens.ignore();
        match token {
            Some(ArithToken::Number(n)) => Ok(Node::Literal(n)),
            Some(ArithToken::OParen) => {
                let inner = self.nested(Self::expr)?;
                let close = self.tokens.next();
                self.tokens.ignore();
                match close {
                    Some(ArithToken::CParen) => Ok(inner),
                    None => Err(ParseError::MissingCParen),
                    Some(token) => Err(Self::unexpected(token)),
                }
            }
            Some(token) => Err(Self::unexpected(token)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn binop(op: char) -> Result<BinOp, ParseError> {
        BinOp::from_char(op).ok_or_else(|| ParseError::UnexpectedToken(op.to_string()))
    }
}
