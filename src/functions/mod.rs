pub mod aggregate;
pub mod exponential;
pub mod rounding;
pub mod trigonometric;

use crate::ast::Evaluator;

/// Installs the complete builtin set.
pub fn register_functions(evaluator: &mut Evaluator) {
    trigonometric::register(evaluator);
    exponential::register(evaluator);
    rounding::register(evaluator);
    aggregate::register(evaluator);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_builtin_set_is_registered() {
        let evaluator = Evaluator::with_builtins();
        for name in [
            "sin", "cos", "tan", "sqrt", "log", "log10", "abs", "ceil", "floor", "min", "max",
        ] {
            assert!(evaluator.has_function(name), "missing builtin {name}");
        }
        assert_eq!(evaluator.functions.len(), 11);
    }
}
