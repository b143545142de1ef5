use crate::error::EvalError;
use std::collections::HashMap;

/// Names that are seeded at session start and can never be reassigned.
pub const PROTECTED_CONSTANTS: [&str; 2] = ["pi", "e"];

/// Session state: variables (including the protected constants) and the
/// append-only history of results.
#[derive(Debug, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
    history: Vec<f64>,
}

impl Context {
    pub fn new() -> Self {
        let variables = HashMap::from([
            ("pi".to_string(), (-1.0f64).acos()),
            ("e".to_string(), 1.0f64.exp()),
        ]);
        Self {
            variables,
            history: Vec::new(),
        }
    }

    pub fn is_protected(name: &str) -> bool {
        PROTECTED_CONSTANTS.contains(&name)
    }

    pub fn has_variable(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn variable(&self, name: &str) -> Result<f64, EvalError> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownVariable(name.to_string()))
    }

    /// Binds `name`, rejecting the protected constants before anything is
    /// written.
    pub fn set_variable(&mut self, name: &str, value: f64) -> Result<(), EvalError> {
        if Self::is_protected(name) {
            return Err(EvalError::ConstantAssignment(name.to_string()));
        }
        self.variables.insert(name.to_string(), value);
        Ok(())
    }

    pub fn push_history(&mut self, value: f64) {
        self.history.push(value);
    }

    /// Looks up the `index`-th result, counting from 1.
    pub fn history_value(&self, index: usize) -> Result<f64, EvalError> {
        index
            .checked_sub(1)
            .and_then(|i| self.history.get(i))
            .copied()
            .ok_or(EvalError::HistoryOutOfRange(index))
    }

    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_are_seeded() {
        let context = Context::new();
        assert_eq!(context.variable("pi"), Ok((-1.0f64).acos()));
        assert_eq!(context.variable("e"), Ok(1.0f64.exp()));
        assert!(context.history().is_empty());
    }

    #[test]
    fn test_constants_cannot_be_reassigned() {
        let mut context = Context::new();
        assert_eq!(
            context.set_variable("pi", 3.0),
            Err(EvalError::ConstantAssignment("pi".to_string()))
        );
        assert_eq!(
            context.set_variable("e", 2.0),
            Err(EvalError::ConstantAssignment("e".to_string()))
        );
        assert_eq!(context.variable("pi"), Ok((-1.0f64).acos()));
        assert_eq!(context.variable("e"), Ok(1.0f64.exp()));
    }

    #[test]
    fn test_variables() {
        let mut context = Context::new();
        assert_eq!(
            context.variable("x"),
            Err(EvalError::UnknownVariable("x".to_string()))
        );
        context.set_variable("x", 1.5).unwrap();
        context.set_variable("x", 2.5).unwrap();
        assert!(context.has_variable("x"));
        assert!(!context.has_variable("X"));
        assert_eq!(context.variable("x"), Ok(2.5));
    }

    #[test]
    fn test_history_is_one_based() {
        let mut context = Context::new();
        context.push_history(10.0);
        context.push_history(20.0);
        assert_eq!(context.history_value(1), Ok(10.0));
        assert_eq!(context.history_value(2), Ok(20.0));
        assert_eq!(context.history_value(0), Err(EvalError::HistoryOutOfRange(0)));
        assert_eq!(context.history_value(3), Err(EvalError::HistoryOutOfRange(3)));
        assert_eq!(context.history(), &[10.0, 20.0]);
    }
}
