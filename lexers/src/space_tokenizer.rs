use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(lexeme: &str) -> Option<Operator> {
        match lexeme {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub enum ArithToken {
    Number(f64, String), // value, lexeme as written
    Op(Operator),
    OParen,
    CParen,
    Unknown(String),
}

impl ArithToken {
    /// Decide what a single lexeme is. Never fails: anything that isn't
    /// an operator, a paren or a numeral is kept around as `Unknown`.
    pub fn classify(lexeme: &str) -> ArithToken {
        if let Some(op) = Operator::from_symbol(lexeme) {
            return ArithToken::Op(op);
        }
        match lexeme {
            "(" => ArithToken::OParen,
            ")" => ArithToken::CParen,
            _ => match f64::from_str(lexeme) {
                Ok(num) => ArithToken::Number(num, lexeme.to_string()),
                Err(_) => ArithToken::Unknown(lexeme.to_string()),
            },
        }
    }
}

impl fmt::Display for ArithToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ArithToken::Number(_, ref lexeme) => write!(f, "{}", lexeme),
            ArithToken::Op(op) => write!(f, "{}", op.symbol()),
            ArithToken::OParen => write!(f, "("),
            ArithToken::CParen => write!(f, ")"),
            ArithToken::Unknown(ref lexeme) => write!(f, "{}", lexeme),
        }
    }
}

// Splits on every single space, so "1  2" has an empty lexeme in the middle
pub struct SpaceTokenizer<'a> {
    src: std::str::Split<'a, char>,
}

impl<'a> SpaceTokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        SpaceTokenizer { src: source.split(' ') }
    }
}

impl<'a> Iterator for SpaceTokenizer<'a> {
    type Item = ArithToken;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(ArithToken::classify)
    }
}

///////////////////////////////////////////////////////////////////////////////
