// ABOUTME: Error types for evaluation failures in the Mini-LISP interpreter
// No variant carries a source position -- the language only requires errors be reported by kind

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("syntax error")]
    Syntax,

    #[error("name error: {0} is not defined")]
    Name(String),

    #[error("type error: {0}")]
    Type(String),

    #[error("runtime error: {0}")]
    Runtime(String),
}

impl InterpreterError {
    pub fn name(symbol: impl Into<String>) -> Self {
        InterpreterError::Name(symbol.into())
    }

    /// Operand-kind mismatch for a built-in or `if`/`fun` construct.
    pub fn type_mismatch(op: &str, expected: &str, actual: &str) -> Self {
        InterpreterError::Type(format!("{op}: expected {expected}, got {actual}"))
    }

    /// Arity mismatch — classified as a type error per the language spec.
    pub fn arity(op: &str, expected: impl Into<String>, actual: usize) -> Self {
        InterpreterError::Type(format!(
            "{op}: expected {} argument(s), got {actual}",
            expected.into()
        ))
    }

    pub fn runtime(op: &str, message: impl Into<String>) -> Self {
        InterpreterError::Runtime(format!("{op}: {}", message.into()))
    }
}
