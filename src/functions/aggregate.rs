use crate::ast::Evaluator;
use crate::error::EvalError;
use reckon_macros::builtin_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("min", min);
    evaluator.register_function("max", max);
}

/// First smallest value; NaN arguments never compare smaller.
#[builtin_fn(min_args = 1)]
pub fn min(values: &[f64]) -> Result<f64, EvalError> {
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v < acc { v } else { acc }))
}

/// First largest value; NaN arguments never compare larger.
#[builtin_fn(min_args = 1)]
pub fn max(values: &[f64]) -> Result<f64, EvalError> {
    Ok(values[1..]
        .iter()
        .fold(values[0], |acc, &v| if v > acc { v } else { acc }))
}
