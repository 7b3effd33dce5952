//! Error types shared by every crate of the workspace.

use thiserror::Error;

/// Dynamic error type that can be sent and shared between threads.
pub type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while talking to the planning system or the navigation stack.
#[derive(Debug, Error)]
pub enum Error {
    /// Message could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Operation timed out.
    #[error("Timeout")]
    Timeout,

    /// The underlying channel was closed.
    #[error("Channel closed")]
    ChannelClosed,

    /// No server answered the request.
    #[error("Service not available: {0}")]
    ServiceNotAvailable(String),

    /// Invalid topic, service, action or node name.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName {
        /// The offending name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Middleware error.
    #[error("Transport error: {0}")]
    Transport(DynError),

    /// Generic error.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidName`].
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(value: &str) -> Self {
        Error::Other(value.to_string())
    }
}

impl From<String> for Error {
    fn from(value: String) -> Self {
        Error::Other(value)
    }
}
