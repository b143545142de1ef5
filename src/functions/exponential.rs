use crate::ast::Evaluator;
use crate::error::EvalError;
use reckon_macros::builtin_fn;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sqrt", sqrt);
    evaluator.register_function("log", log);
    evaluator.register_function("log10", log10);
}

// Out-of-domain inputs give NaN or infinities rather than errors.

#[builtin_fn]
pub fn sqrt(x: f64) -> Result<f64, EvalError> {
    Ok(x.sqrt())
}

/// Natural logarithm.
#[builtin_fn]
pub fn log(x: f64) -> Result<f64, EvalError> {
    Ok(x.ln())
}

#[builtin_fn]
pub fn log10(x: f64) -> Result<f64, EvalError> {
    Ok(x.log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(sqrt(&[9.0]), Ok(3.0));
        assert_eq!(log(&[1.0]), Ok(0.0));
        assert_eq!(log10(&[1000.0]), Ok(3.0));
    }

    #[test]
    fn test_out_of_domain() {
        assert!(sqrt(&[-4.0]).unwrap().is_nan());
        assert!(log(&[-1.0]).unwrap().is_nan());
        assert_eq!(log10(&[0.0]), Ok(f64::NEG_INFINITY));
    }

    #[test]
    fn test_arity_message() {
        assert_eq!(
            log10(&[]).unwrap_err().to_string(),
            "Function 'log10' expects 1 argument but got 0"
        );
    }
}
