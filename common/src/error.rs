use thiserror::Error;

/// Reasons a session refuses or abandons an operation.
///
/// Rejections (`Validation`, `Conflict`, `NotConnected`) never touch the
/// session they were raised for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    #[error("a {operation} is already in progress")]
    Conflict { operation: &'static str },

    #[error("operation failed: {0}")]
    OperationFailed(String),

    #[error("no LLM endpoint is connected")]
    NotConnected,

    #[error("unknown scan kind: {0}")]
    UnknownKind(String),
}

impl SessionError {
    pub fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    pub fn conflict(operation: &'static str) -> Self {
        Self::Conflict { operation }
    }
}
