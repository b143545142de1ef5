use crate::ast::Evaluator;
use crate::error::EvalError;
use reckon_macros::builtin_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("abs", abs);
    evaluator.register_function("ceil", ceil);
    evaluator.register_function("floor", floor);
}

#[builtin_fn]
pub fn abs(x: f64) -> Result<f64, EvalError> {
    Ok(x.abs())
}

#[builtin_fn]
pub fn ceil(x: f64) -> Result<f64, EvalError> {
    Ok(x.ceil())
}

#[builtin_fn]
pub fn floor(x: f64) -> Result<f64, EvalError> {
    Ok(x.floor())
}
