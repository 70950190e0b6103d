use thiserror::Error;

/// ASG error types
#[derive(Error, Debug)]
pub enum AsgError {
    /// No application security group with the requested name
    #[error("Application security group {0} not found")]
    NotFound(String),

    /// Cloud Controller answered with a non-success status
    #[error("Server error, status code: {status}, message: {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure talking to the API
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AsgError {
    fn from(err: serde_json::Error) -> Self {
        AsgError::SerializationError(err.to_string())
    }
}

/// Result type alias for ASG operations
pub type Result<T> = std::result::Result<T, AsgError>;
