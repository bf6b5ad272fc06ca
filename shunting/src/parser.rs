use lexers::{ArithToken, Operator, SpaceTokenizer};
use log::{debug, trace};
use std::ops::Deref;

// All operators are left associative, so only precedence is needed
pub fn precedence(op: Operator) -> usize {
    match op {
        Operator::Add | Operator::Sub => 1,
        Operator::Mul | Operator::Div => 2,
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct RPNExpr(pub Vec<ArithToken>);

impl Deref for RPNExpr {
    type Target = [ArithToken];
    fn deref(&self) -> &[ArithToken] {
        &self.0
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    pub fn parse_str(expr: &str) -> RPNExpr {
        Self::parse(&mut SpaceTokenizer::new(expr))
    }

    /// Reorder infix tokens into postfix. This never fails: numerals aren't
    /// validated and unbalanced parens are tolerated, leaving it to the
    /// evaluator to reject whatever can't be computed.
    pub fn parse(lex: &mut impl Iterator<Item = ArithToken>) -> RPNExpr {
        let mut out = Vec::new();
        let mut stack: Vec<ArithToken> = Vec::new();

        for token in lex {
            trace!("shunting {:?} out={} stack={}", token, out.len(), stack.len());
            match token {
                ArithToken::Op(op) => {
                    // a '(' on top stops the popping
                    while let Some(&ArithToken::Op(top)) = stack.last() {
                        if precedence(top) < precedence(op) {
                            break;
                        }
                        out.extend(stack.pop());
                    }
                    stack.push(token);
                }
                ArithToken::OParen => stack.push(token),
                ArithToken::CParen => {
                    // an unmatched ')' flushes the stack and is dropped
                    while let Some(top) = stack.pop() {
                        if top == ArithToken::OParen {
                            break;
                        }
                        out.push(top);
                    }
                }
                ArithToken::Number(..) | ArithToken::Unknown(_) => out.push(token),
            }
        }
        // unmatched '(' are left in the output
        while let Some(top) = stack.pop() {
            out.push(top);
        }
        let rpn = RPNExpr(out);
        debug!("rpn: {}", rpn);
        rpn
    }
}

pub fn convert(expression: &str) -> String {
    ShuntingParser::parse_str(expression).to_string()
}
