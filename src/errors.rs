use thiserror::Error;

/// Error type that captures the failures shared by every engine.
#[derive(Debug, Error)]
pub enum CashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Task not found at position {0}")]
    TaskNotFound(usize),
}

/// User input that fails a precondition. The requested mutation is rejected
/// and prior state stays intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
    #[error("task text must not be empty")]
    EmptyTaskText,
    #[error("`{0}` is not a single digit")]
    InvalidDigit(String),
    #[error("`{0}` is not an operator (use + - * /)")]
    InvalidOperator(String),
    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, CashError>;
