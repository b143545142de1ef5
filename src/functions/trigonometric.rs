use crate::ast::Evaluator;
use crate::error::EvalError;
use reckon_macros::builtin_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", sin);
    evaluator.register_function("cos", cos);
    evaluator.register_function("tan", tan);
}

/// Arguments are in radians.
#[builtin_fn]
pub fn sin(x: f64) -> Result<f64, EvalError> {
    Ok(x.sin())
}

#[builtin_fn]
pub fn cos(x: f64) -> Result<f64, EvalError> {
    Ok(x.cos())
}

#[builtin_fn]
pub fn tan(x: f64) -> Result<f64, EvalError> {
    Ok(x.tan())
}
