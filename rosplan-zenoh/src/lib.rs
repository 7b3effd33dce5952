//! Pure Rust transport for the ROSPlan move_base action interface, over Zenoh.
//!
//! # Architecture
//!
//! - Each [`Context`] maps to a Zenoh session
//! - [`Node`]s are logical groupings resolving relative and private names
//! - [`Publisher`]/[`Subscriber`] use Zenoh pub/sub
//! - [`Client`]/[`Server`] use Zenoh queryables
//! - [`ActionClient`] follows the actionlib topic layout (`goal`, `cancel`, `result`)
//! - [`MessageStoreProxy`] looks up named messages through a [`Client`]
//!
//! Payloads are JSON documents produced by [`rosplan_core::TypeSupport`].
//!
//! # Example
//!
//! ```ignore
//! use rosplan_zenoh::Context;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = Context::new()?;
//!     let node = ctx.create_node("my_node", None)?;
//!
//!     // Create publisher, subscriber, etc.
//!     Ok(())
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod context;
mod error;
mod keyexpr;
mod message_store;
mod node;

pub mod action;
pub mod service;
pub mod topic;

// Re-exports
pub use action::client::ActionClient;
pub use context::Context;
pub use error::{Error, Result};
pub use keyexpr::{action_liveliness_keyexpr, expand_name, topic_keyexpr, validate_name};
pub use message_store::MessageStoreProxy;
pub use node::Node;
pub use service::{ServiceRequest, client::Client, server::Server};
pub use topic::{publisher::Publisher, subscriber::Subscriber};
