use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Plus,
    Minus,
}

/// Syntax tree of a parsed expression. Each node owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(f64),
    BinaryOp(BinOp, Box<Node>, Box<Node>),
    UnaryOp(UnOp, Box<Node>),
}

impl Node {
    pub fn binary(op: BinOp, lhs: Node, rhs: Node) -> Node {
        Node::BinaryOp(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn unary(op: UnOp, operand: Node) -> Node {
        Node::UnaryOp(op, Box::new(operand))
    }
}

impl BinOp {
    pub fn from_char(op: char) -> Option<BinOp> {
        match op {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            '^' => Some(BinOp::Pow),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
            BinOp::Pow => '^',
        }
    }
}

impl UnOp {
    pub fn from_char(op: char) -> Option<UnOp> {
        match op {
            '+' => Some(UnOp::Plus),
            '-' => Some(UnOp::Minus),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            UnOp::Plus => '+',
            UnOp::Minus => '-',
        }
    }
}

// Fully parenthesized infix, so the shape of the tree is visible.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Literal(n) => write!(f, "{}", n),
            Node::UnaryOp(op, operand) => write!(f, "{}{}", op.symbol(), operand),
            Node::BinaryOp(op, lhs, rhs) => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
        }
    }
}
