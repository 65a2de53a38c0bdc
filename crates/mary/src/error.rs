use crate::values::{format_value, Value};

/// Failure raised by a library operation.
///
/// Errors are never recovered internally; every operation either returns a
/// well-formed value or hands one of these back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("{op}: empty list")]
    EmptyList { op: String },
    #[error("{op} expects {expected}, got {found}")]
    TypeMismatch {
        op: String,
        expected: String,
        found: String,
    },
    #[error("builtin {name} expects {arity} args")]
    Arity { name: String, arity: usize },
    #[error("expected function, got {found}")]
    NotCallable { found: String },
    #[error("{0}")]
    Message(String),
}

impl RuntimeError {
    pub fn empty_list(op: &str) -> Self {
        RuntimeError::EmptyList { op: op.to_string() }
    }

    pub fn type_mismatch(op: &str, expected: &str, found: &Value) -> Self {
        RuntimeError::TypeMismatch {
            op: op.to_string(),
            expected: expected.to_string(),
            found: format_value(found),
        }
    }
}

impl From<String> for RuntimeError {
    fn from(value: String) -> Self {
        RuntimeError::Message(value)
    }
}

impl From<&str> for RuntimeError {
    fn from(value: &str) -> Self {
        RuntimeError::Message(value.to_string())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MaryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Config(String),
}
