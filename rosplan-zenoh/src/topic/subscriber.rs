//! Topic subscriber.

use crate::{
    error::{Error, Result},
    keyexpr::topic_keyexpr,
    node::Node,
};
use rosplan_core::TypeSupport;
use std::{borrow::Cow, marker::PhantomData, sync::Arc};
use zenoh::{Wait, sample::Sample};

/// Queue size used when none is given.
pub const DEFAULT_DEPTH: usize = 10;

/// Topic subscriber.
///
/// Receives messages from a topic using Zenoh. Samples are queued in a
/// bounded channel; when it is full the oldest sample is dropped.
///
/// # Example
///
/// ```ignore
/// let mut subscriber = node.create_subscriber::<ActionDispatch>("/kcl_rosplan/action_dispatch", None)?;
///
/// // Async receive
/// let msg = subscriber.recv().await?;
///
/// // Non-blocking receive
/// if let Some(msg) = subscriber.try_recv()? {
///     println!("Received: {}", msg.name);
/// }
/// ```
pub struct Subscriber<T> {
    /// Parent node.
    node: Arc<Node>,
    /// Topic name.
    topic_name: String,
    /// Fully qualified topic name.
    fq_topic_name: String,
    /// Message receiver channel.
    receiver: flume::Receiver<Sample>,
    /// Zenoh subscriber (kept alive).
    _zenoh_subscriber: zenoh::pubsub::Subscriber<()>,
    /// Phantom data for type.
    _phantom: PhantomData<T>,
}

impl<T: TypeSupport> Subscriber<T> {
    /// Create a new subscriber.
    ///
    /// # Arguments
    ///
    /// * `node` - Parent node
    /// * `topic_name` - Original topic name (for display)
    /// * `fq_topic_name` - Fully qualified topic name (already expanded)
    /// * `depth` - Queue size
    pub(crate) fn new(
        node: Arc<Node>,
        topic_name: &str,
        fq_topic_name: &str,
        depth: Option<usize>,
    ) -> Result<Self> {
        let key_expr = topic_keyexpr(node.context().domain_id(), fq_topic_name, T::type_name());

        let depth = depth.unwrap_or(DEFAULT_DEPTH).max(1);
        let (sender, receiver) = flume::bounded(depth);

        // Clone receiver for use in callback (to implement KeepLast drop-oldest semantics)
        let drain_receiver = receiver.clone();

        let zenoh_subscriber = node
            .context()
            .session()
            .declare_subscriber(key_expr)
            .callback(move |sample: Sample| {
                if sender.is_full() {
                    let _ = drain_receiver.try_recv();
                }
                let _ = sender.try_send(sample);
            })
            .wait()?;

        Ok(Subscriber {
            node,
            topic_name: topic_name.to_string(),
            fq_topic_name: fq_topic_name.to_string(),
            receiver,
            _zenoh_subscriber: zenoh_subscriber,
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

    /// Receive a message asynchronously.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the channel is closed.
    pub async fn recv(&mut self) -> Result<T> {
        let sample = self
            .receiver
            .recv_async()
            .await
            .map_err(|_| Error::ChannelClosed)?;
        Ok(T::from_bytes(&sample.payload().to_bytes())?)
    }

    /// Try to receive a message without blocking.
    ///
    /// Returns `None` if no message is available.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn try_recv(&mut self) -> Result<Option<T>> {
        match self.receiver.try_recv() {
            Ok(sample) => Ok(Some(T::from_bytes(&sample.payload().to_bytes())?)),
            Err(flume::TryRecvError::Empty) => Ok(None),
            Err(flume::TryRecvError::Disconnected) => Err(Error::ChannelClosed),
        }
    }

    /// Get the parent node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

// ============================================================================
// RosSubscriber trait implementation
// ============================================================================

impl<T: TypeSupport> rosplan_core::api::RosSubscriber<T> for Subscriber<T> {
    fn topic_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(Subscriber::topic_name(self))
    }

    async fn recv(&mut self) -> rosplan_core::Result<T> {
        Ok(Subscriber::recv(self).await?)
    }

    fn try_recv(&mut self) -> rosplan_core::Result<Option<T>> {
        Ok(Subscriber::try_recv(self)?)
    }
}
