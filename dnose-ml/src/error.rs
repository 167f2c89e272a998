//! Error types for the classifier

use thiserror::Error;

pub type MlResult<T> = Result<T, MlError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MlError {
    #[error("classifier has not been trained")]
    NotTrained,

    #[error("insufficient training data: {0}")]
    InsufficientData(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("shape mismatch: expected {expected} channels, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("serialization error: {0}")]
    Serialization(String),
}
