//! Color subsystem errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorError {
    #[error("non-finite component value: {0}")]
    NonFinite(f64),
    #[error("component value {value} is outside [0, 1]")]
    OutOfRange { value: f64 },
    #[error("invalid color key: {0}")]
    InvalidKey(String),
}

/// Result type alias for fallible color operations.
pub type ColorResult<T> = std::result::Result<T, ColorError>;
