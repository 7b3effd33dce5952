//! Error types for rosplan-zenoh.
//!
//! This module provides error types that are compatible with `rosplan-core`
//! while also handling Zenoh-specific errors.

use thiserror::Error;

/// Result type for rosplan-zenoh operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rosplan-zenoh.
#[derive(Debug, Error)]
pub enum Error {
    /// Core error from rosplan-core
    #[error("{0}")]
    Core(#[from] rosplan_core::Error),

    /// Zenoh session error
    #[error("Zenoh error: {0}")]
    Zenoh(#[from] zenoh::Error),

    /// Service not available
    #[error("Service not available: {0}")]
    ServiceNotAvailable(String),

    /// No goal was sent yet
    #[error("No goal sent on action {0}")]
    NoGoal(String),

    /// Channel closed
    #[error("Channel closed")]
    ChannelClosed,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<Error> for rosplan_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(e) => e,
            Error::ChannelClosed => rosplan_core::Error::ChannelClosed,
            Error::ServiceNotAvailable(name) => rosplan_core::Error::ServiceNotAvailable(name),
            Error::Zenoh(e) => rosplan_core::Error::Transport(e),
            Error::NoGoal(_) | Error::InvalidConfig(_) => rosplan_core::Error::Other(err.to_string()),
        }
    }
}
