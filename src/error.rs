//! Error handling for the harness.
//!
//! The sorters themselves are infallible. Errors only arise at the edges: reading
//! selectors, writing the report, and validating configuration.

use thiserror::Error;

/// Main error type for the benchmark harness
#[derive(Error, Debug)]
pub enum HarnessError {
    /// I/O related errors on the selector input or report output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Configuration error message
        message: String,
    },
}

impl HarnessError {
    /// Create a configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;
