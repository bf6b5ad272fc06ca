use crate::parser::RPNExpr;
use std::fmt;

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
        }
        for token in tokens {
            write!(f, " {}", token)?;
        }
        Ok(())
    }
}
