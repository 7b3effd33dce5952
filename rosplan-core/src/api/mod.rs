//! Abstract API traits for middleware implementations.
//!
//! The action interface is written against these traits so that it does not
//! depend on the transport in use. `rosplan-zenoh` implements them over Zenoh;
//! tests implement them in memory.
//!
//! # Traits
//!
//! - [`RosPublisher`] - Publishes messages to a topic
//! - [`RosSubscriber`] - Receives messages from a topic
//! - [`RosClient`] - Sends service requests and receives responses
//! - [`RosActionClient`] - Drives one goal at a time on an action server
//! - [`MessageStore`] - Looks up stored messages by name

use crate::{ActionMsg, GoalState, Result, ServiceMsg, TypeSupport};
use std::{borrow::Cow, future::Future, time::Duration};

// ============================================================================
// Publisher Trait
// ============================================================================

/// A publisher that can send messages to a topic.
pub trait RosPublisher<T: TypeSupport>: Send + Sync {
    /// Get the topic name.
    fn topic_name(&self) -> Cow<'_, str>;

    /// Publish a message.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the publish operation fails.
    fn send(&self, msg: &T) -> Result<()>;
}

// ============================================================================
// Subscriber Trait
// ============================================================================

/// A subscriber that can receive messages from a topic.
pub trait RosSubscriber<T: TypeSupport>: Send {
    /// Get the topic name.
    fn topic_name(&self) -> Cow<'_, str>;

    /// Receive a message asynchronously.
    ///
    /// This method waits until a message is available.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the subscription is closed.
    fn recv(&mut self) -> impl Future<Output = Result<T>> + Send;

    /// Try to receive a message without blocking.
    ///
    /// Returns `Ok(None)` if no message is currently available.
    fn try_recv(&mut self) -> Result<Option<T>>;
}

// ============================================================================
// Client Trait
// ============================================================================

/// A service client that can send requests and receive responses.
pub trait RosClient<T: ServiceMsg>: Send {
    /// Get the service name.
    fn service_name(&self) -> Cow<'_, str>;

    /// Send a request and wait for a response.
    ///
    /// Uses a default timeout (implementation-specific).
    fn call(&mut self, request: &T::Request) -> impl Future<Output = Result<T::Response>> + Send;
}

// ============================================================================
// Action Client Trait
// ============================================================================

/// A simple action client: it tracks a single goal at a time.
///
/// Sending a new goal forgets about the previous one.
pub trait RosActionClient<T: ActionMsg>: Send {
    /// Get the action name.
    fn action_name(&self) -> Cow<'_, str>;

    /// Check if the action server is reachable.
    fn is_server_available(&self) -> impl Future<Output = bool> + Send;

    /// Send a goal to the action server.
    fn send_goal(&mut self, goal: &T::Goal) -> impl Future<Output = Result<()>> + Send;

    /// Wait until the current goal reaches a terminal state.
    ///
    /// Returns `Ok(false)` when `timeout` elapsed first. `None` waits forever.
    fn wait_for_result(
        &mut self,
        timeout: Option<Duration>,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// State of the current goal.
    fn state(&self) -> GoalState;

    /// Ask the action server to cancel every goal, including goals sent by other clients.
    fn cancel_all_goals(&mut self) -> impl Future<Output = Result<()>> + Send;
}

// ============================================================================
// Message Store Trait
// ============================================================================

/// A store of named messages.
pub trait MessageStore: Send {
    /// Fetch every message of type `T` stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached. An empty vector means
    /// the query succeeded but nothing matched.
    fn query_named<T: TypeSupport>(
        &mut self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<T>>> + Send;
}
