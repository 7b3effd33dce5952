//! Topic publisher.

use crate::{error::Result, keyexpr::topic_keyexpr, node::Node};
use rosplan_core::TypeSupport;
use std::{borrow::Cow, marker::PhantomData, sync::Arc};
use zenoh::Wait;

/// Topic publisher.
///
/// Publishes messages to a topic using Zenoh.
///
/// # Example
///
/// ```ignore
/// let publisher = node.create_publisher::<ActionFeedback>("/kcl_rosplan/action_feedback")?;
/// publisher.send(&ActionFeedback::new(1, ActionFeedback::ENABLED))?;
/// ```
pub struct Publisher<T> {
    /// Parent node.
    node: Arc<Node>,
    /// Topic name.
    topic_name: String,
    /// Fully qualified topic name.
    fq_topic_name: String,
    /// Zenoh publisher.
    zenoh_publisher: zenoh::pubsub::Publisher<'static>,
    /// Phantom data for type.
    _phantom: PhantomData<T>,
}

impl<T: TypeSupport> Publisher<T> {
    /// Create a new publisher.
    ///
    /// # Arguments
    ///
    /// * `node` - Parent node
    /// * `topic_name` - Original topic name (for display)
    /// * `fq_topic_name` - Fully qualified topic name (already expanded)
    pub(crate) fn new(node: Arc<Node>, topic_name: &str, fq_topic_name: &str) -> Result<Self> {
        let key_expr = topic_keyexpr(node.context().domain_id(), fq_topic_name, T::type_name());
        let zenoh_publisher = node
            .context()
            .session()
            .declare_publisher(key_expr)
            .wait()?;

        Ok(Publisher {
            node,
            topic_name: topic_name.to_string(),
            fq_topic_name: fq_topic_name.to_string(),
            zenoh_publisher,
            _phantom: PhantomData,
        })
    }

    /// Get the topic name.
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Get the fully qualified topic name.
    pub fn fully_qualified_topic_name(&self) -> &str {
        &self.fq_topic_name
    }

    /// Publish a message.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the Zenoh put fails.
    pub fn send(&self, msg: &T) -> Result<()> {
        let payload = msg.to_bytes()?;
        self.zenoh_publisher.put(payload).wait()?;
        Ok(())
    }

    /// Get the parent node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

// ============================================================================
// RosPublisher trait implementation
// ============================================================================

impl<T: TypeSupport> rosplan_core::api::RosPublisher<T> for Publisher<T> {
    fn topic_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(Publisher::topic_name(self))
    }

    fn send(&self, msg: &T) -> rosplan_core::Result<()> {
        Ok(Publisher::send(self, msg)?)
    }
}
