use std::fmt;
use thiserror::Error;

/// Lexical and structural failures. Positions are byte offsets into the
/// statement text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("Unexpected token '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    #[error("Invalid number at position {position}")]
    InvalidNumber { position: usize },

    #[error("Unexpected token '$' at position {position}: expected a history index")]
    MissingHistoryIndex { position: usize },

    /// `$N` whose index does not fit in `usize`; `index` holds the digits as
    /// written.
    #[error("History reference '${index}' out of range")]
    HistoryIndexOverflow { index: String, position: usize },

    #[error("Expression nested too deeply at position {position}")]
    NestingTooDeep { position: usize },

    /// `lexeme` is `<end>` when the input ran out.
    #[error("Unexpected token '{lexeme}' at position {position}")]
    UnexpectedToken { lexeme: String, position: usize },
}

/// How many arguments a builtin accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (prefix, count) = match self {
            Arity::Exactly(n) => ("", *n),
            Arity::AtLeast(n) => ("at least ", *n),
        };
        let plural = if count == 1 { "" } else { "s" };
        write!(f, "{}{} argument{}", prefix, count, plural)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("Unknown variable '{0}'")]
    UnknownVariable(String),

    #[error("History reference '${0}' out of range")]
    HistoryOutOfRange(usize),

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Modulo by zero")]
    ModuloByZero,

    #[error("Function '{function}' expects {expected} but got {actual}")]
    ArgumentCount {
        function: String,
        expected: Arity,
        actual: usize,
    },

    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    #[error("Cannot assign to constant '{0}'")]
    ConstantAssignment(String),
}

/// Anything a single statement can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
