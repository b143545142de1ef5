use crate::error::EvalError;
use std::fmt;

mod evaluator;
mod parser;

pub use evaluator::*;
pub use parser::Parser;

/// Divisors whose magnitude falls below this are treated as zero.
pub const ZERO_EPSILON: f64 = 1e-12;

/// Deepest tree the parser will build. Both nesting (parentheses, unary
/// minus, exponents, call arguments) and operator chains count, which keeps
/// parsing, evaluation and drop within a small stack.
pub const MAX_NESTING_DEPTH: usize = 256;

#[derive(Debug, Clone, PartialEq)]
pub enum ASTNode {
    Number(f64),
    Identifier(String),
    /// `$n`, 1-based.
    HistoryRef(usize),
    Negation(Box<ASTNode>),
    BinaryOperation {
        left: Box<ASTNode>,
        operator: Operator,
        right: Box<ASTNode>,
    },
    FunctionCall {
        name: String,
        args: Vec<ASTNode>,
    },
    Assignment {
        name: String,
        value: Box<ASTNode>,
    },
}

impl ASTNode {
    pub fn binary(left: ASTNode, operator: Operator, right: ASTNode) -> Self {
        ASTNode::BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn negation(operand: ASTNode) -> Self {
        ASTNode::Negation(Box::new(operand))
    }

    /// Whether evaluating this tree can neither write to nor depend on the
    /// session history, so repeated evaluation against an unchanged context
    /// gives the same value.
    pub fn is_pure(&self) -> bool {
        match self {
            ASTNode::Number(_) | ASTNode::Identifier(_) => true,
            ASTNode::HistoryRef(_) | ASTNode::Assignment { .. } => false,
            ASTNode::Negation(operand) => operand.is_pure(),
            ASTNode::BinaryOperation { left, right, .. } => left.is_pure() && right.is_pure(),
            ASTNode::FunctionCall { args, .. } => args.iter().all(ASTNode::is_pure),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right.abs() < ZERO_EPSILON {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(left / right)
                }
            }
            Operator::Modulo => {
                if right.abs() < ZERO_EPSILON {
                    Err(EvalError::ModuloByZero)
                } else {
                    Ok(left % right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Power => "^",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
