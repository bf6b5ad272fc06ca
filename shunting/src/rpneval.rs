use crate::parser::{RPNExpr, ShuntingParser};
use lexers::{ArithToken, Operator, SpaceTokenizer};
use log::{debug, trace};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum EvalErr {
    #[error("Invalid expression")]
    InvalidExpression,
}

pub(crate) fn apply(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        // x/0 is +-inf and 0/0 is NaN, straight from IEEE-754
        Operator::Div => a / b,
    }
}

impl RPNExpr {
    pub fn eval(&self) -> Result<f64, EvalErr> {
        let mut operands = Vec::new();

        for token in self.0.iter() {
            match *token {
                ArithToken::Number(num, _) => operands.push(num),
                ArithToken::Op(op) => {
                    let (b, a) = match (operands.pop(), operands.pop()) {
                        (Some(b), Some(a)) => (b, a),
                        _ => {
                            debug!("'{}' is missing operands", op.symbol());
                            return Err(EvalErr::InvalidExpression);
                        }
                    };
                    operands.push(apply(op, a, b));
                }
                _ => {
                    debug!("bad token in rpn: '{}'", token);
                    return Err(EvalErr::InvalidExpression);
                }
            }
            trace!("{} -> {:?}", token, operands);
        }
        match operands[..] {
            [result] => Ok(result),
            _ => {
                debug!("{} values left on the stack", operands.len());
                Err(EvalErr::InvalidExpression)
            }
        }
    }
}

pub fn evaluate(rpn: &str) -> Result<f64, EvalErr> {
    RPNExpr(SpaceTokenizer::new(rpn).collect()).eval()
}

/// Convert an infix expression and evaluate it in one go.
pub fn calculate(expression: &str) -> Result<f64, EvalErr> {
    ShuntingParser::parse_str(expression).eval()
}
