extern crate lexers;

pub use parser::RPNExpr;
pub use parser::ShuntingParser;
pub use parser::convert;

pub mod parser;

pub use self::rpneval::EvalErr;
pub use self::rpneval::{calculate, evaluate};

mod rpnprint;
mod rpneval;
