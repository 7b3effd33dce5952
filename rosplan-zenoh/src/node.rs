//! Node abstraction.
//!
//! A [`Node`] owns a name and a namespace and creates publishers, subscribers,
//! service clients, service servers and action clients with names resolved
//! against them.

use crate::{
    action::client::ActionClient,
    context::Context,
    error::Result,
    keyexpr::expand_name,
    message_store::MessageStoreProxy,
    service::{client::Client, server::Server},
    topic::{publisher::Publisher, subscriber::Subscriber},
};
use rosplan_core::{ActionMsg, ServiceMsg, TypeSupport};
use std::{sync::Arc, time::Duration};

/// Node.
///
/// # Example
///
/// ```ignore
/// let ctx = Context::new()?;
/// let node = ctx.create_node("my_node", Some("/robot1"))?;
///
/// let publisher = node.create_publisher::<ActionFeedback>("action_feedback")?;
/// let subscriber = node.create_subscriber::<ActionDispatch>("action_dispatch", None)?;
/// ```
pub struct Node {
    /// Parent context.
    context: Context,
    /// Node name.
    name: String,
    /// Node namespace.
    namespace: String,
}

impl Node {
    /// Create a new node.
    pub(crate) fn new(context: Context, name: &str, namespace: &str) -> Arc<Self> {
        Arc::new(Node {
            context,
            name: name.to_string(),
            namespace: namespace.to_string(),
        })
    }

    /// Get the parent context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Get the node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the node namespace.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Get the fully qualified node name (namespace + name).
    pub fn fully_qualified_name(&self) -> String {
        let namespace = self.namespace.trim_end_matches('/');
        format!("{}/{}", namespace, self.name)
    }

    /// Expand a topic, service or action name relative to this node.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid.
    pub fn resolve_name(&self, name: &str) -> Result<String> {
        expand_name(name, &self.name, &self.namespace)
    }

    /// Create a publisher.
    pub fn create_publisher<T: TypeSupport>(self: &Arc<Self>, topic_name: &str) -> Result<Publisher<T>> {
        let fq_topic_name = self.resolve_name(topic_name)?;
        Publisher::new(self.clone(), topic_name, &fq_topic_name)
    }

    /// Create a subscriber.
    ///
    /// # Arguments
    ///
    /// * `topic_name` - Topic name (can be relative, absolute or private)
    /// * `depth` - Queue size, the oldest message is dropped when full (default 10)
    pub fn create_subscriber<T: TypeSupport>(
        self: &Arc<Self>,
        topic_name: &str,
        depth: Option<usize>,
    ) -> Result<Subscriber<T>> {
        let fq_topic_name = self.resolve_name(topic_name)?;
        Subscriber::new(self.clone(), topic_name, &fq_topic_name, depth)
    }

    /// Create a service client.
    ///
    /// # Arguments
    ///
    /// * `service_name` - Service name (can be relative, absolute or private)
    /// * `timeout` - Call timeout (default 10s)
    pub fn create_client<T: ServiceMsg>(
        self: &Arc<Self>,
        service_name: &str,
        timeout: Option<Duration>,
    ) -> Result<Client<T>> {
        let fq_service_name = self.resolve_name(service_name)?;
        Client::new(self.clone(), service_name, &fq_service_name, timeout)
    }

    /// Create a service server.
    pub fn create_server<T: ServiceMsg>(self: &Arc<Self>, service_name: &str) -> Result<Server<T>> {
        let fq_service_name = self.resolve_name(service_name)?;
        Server::new(self.clone(), service_name, &fq_service_name)
    }

    /// Create an action client.
    pub fn create_action_client<T: ActionMsg>(self: &Arc<Self>, action_name: &str) -> Result<ActionClient<T>> {
        let fq_action_name = self.resolve_name(action_name)?;
        ActionClient::new(self.clone(), action_name, &fq_action_name)
    }

    /// Create a proxy to the message store answering on `service_name`.
    pub fn create_message_store(
        self: &Arc<Self>,
        service_name: &str,
        timeout: Option<Duration>,
    ) -> Result<MessageStoreProxy> {
        let client = self.create_client(service_name, timeout)?;
        Ok(MessageStoreProxy::new(client))
    }
}
