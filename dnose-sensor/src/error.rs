//! Error types for the sensor simulator

use thiserror::Error;

pub type SensorResult<T> = Result<T, SensorError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SensorError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid profile: {0}")]
    InvalidProfile(String),
}
