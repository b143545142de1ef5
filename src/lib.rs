pub mod ast;
pub mod batch;
pub mod calculator;
pub mod context;
pub mod error;
pub mod format;
pub mod functions;
pub mod lexer;
pub mod repl;

pub use calculator::Calculator;
pub use context::Context;
pub use error::{CalcError, EvalError, ParseError};

/// Evaluates a single statement in a fresh session.
pub fn evaluate_expression(expression: &str) -> Result<f64, CalcError> {
    Calculator::with_cache_size(0).evaluate(expression)
}
