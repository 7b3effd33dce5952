//! Core traits and types for the ROSPlan move_base action interface.
//!
//! This crate provides the message types exchanged with the planning system and
//! the navigation stack, together with the abstract client traits the action
//! interface is written against. It does not depend on any middleware, which
//! allows for multiple implementations (Zenoh, mock, ...).

pub mod action;
pub mod api;
pub mod error;
pub mod interfaces;
pub mod msg;
pub mod time;

// Re-export commonly used error types
pub use error::{DynError, Error, Result};

// Re-export API traits
pub use api::{MessageStore, RosActionClient, RosClient, RosPublisher, RosSubscriber};

// Re-export message traits
pub use action::GoalState;
pub use msg::{ActionMsg, ServiceMsg, TypeSupport};
pub use time::Time;
