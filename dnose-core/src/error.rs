//! Error types for the core data model

use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("registry requires at least one profile")]
    EmptyRegistry,

    #[error("profile '{family}' has {actual} channels, registry established {expected}")]
    ChannelCountMismatch {
        family: String,
        expected: usize,
        actual: usize,
    },

    #[error("duplicate profile for family '{0}'")]
    DuplicateFamily(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("unknown scent family: {0}")]
    UnknownFamily(String),
}
