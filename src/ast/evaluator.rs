use crate::ast::{ASTNode, Parser};
use crate::context::Context;
use crate::error::{CalcError, EvalError};
use crate::functions::register_functions;
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;

pub type Function = Arc<dyn Fn(&[f64]) -> Result<f64, EvalError> + Send + Sync>;

/// Tree-walking evaluator. Holds the builtin function table; all session
/// state lives in the [`Context`] passed to each call.
pub struct Evaluator {
    pub(crate) functions: HashMap<String, Function>,
}

impl Evaluator {
    /// An evaluator with no functions registered.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// An evaluator with the full builtin set.
    pub fn with_builtins() -> Self {
        let mut evaluator = Self::new();
        register_functions(&mut evaluator);
        evaluator
    }

    /// Registers a builtin under `name`, replacing any previous one.
    pub(crate) fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(&[f64]) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    pub fn has_function(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Parses and evaluates `expression` without touching the history.
    pub fn evaluate_expression(
        &self,
        expression: &str,
        context: &mut Context,
    ) -> Result<f64, CalcError> {
        let ast = Parser::parse_expression(expression)?;
        Ok(self.evaluate(&ast, context)?)
    }

    /// Evaluates an `ASTNode` against `context`. Assignments write to the
    /// context; history is only read.
    pub fn evaluate(&self, ast: &ASTNode, context: &mut Context) -> Result<f64, EvalError> {
        match ast {
            ASTNode::Number(n) => Ok(*n),

            ASTNode::Identifier(name) => context.variable(name),

            ASTNode::HistoryRef(index) => context.history_value(*index),

            ASTNode::Negation(operand) => Ok(-self.evaluate(operand, context)?),

            ASTNode::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left_value = self.evaluate(left, context)?;
                let right_value = self.evaluate(right, context)?;
                operator.apply(left_value, right_value)
            }

            ASTNode::FunctionCall { name, args } => {
                let values = args
                    .iter()
                    .map(|arg| self.evaluate(arg, context))
                    .collect::<Result<Vec<f64>, EvalError>>()?;

                let function = self
                    .functions
                    .get(name)
                    .ok_or_else(|| EvalError::UnknownFunction(name.clone()))?;
                trace!("Calling {} with {:?}", name, values);
                function(&values)
            }

            ASTNode::Assignment { name, value } => {
                let value = self.evaluate(value, context)?;
                context.set_variable(name, value)?;
                debug!("Assigned {} = {}", name, value);
                Ok(value)
            }
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::with_builtins()
    }
}
