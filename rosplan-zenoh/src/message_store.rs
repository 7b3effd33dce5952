//! Message store proxy.

use crate::{error::Result, service::client::Client};
use rosplan_core::{
    TypeSupport,
    interfaces::message_store_msgs::srv::{QueryMessages, QueryMessages_Request},
};
use tracing::debug;

/// Looks up named messages in a message store reached through a service.
///
/// # Example
///
/// ```ignore
/// let mut store = node.create_message_store("/message_store/query_messages", None)?;
/// let poses: Vec<PoseStamped> = store.query_named("wp3").await?;
/// ```
pub struct MessageStoreProxy {
    client: Client<QueryMessages>,
}

impl MessageStoreProxy {
    pub(crate) fn new(client: Client<QueryMessages>) -> Self {
        MessageStoreProxy { client }
    }

    /// Fetch every message of type `T` stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store does not answer or a stored message is
    /// not a `T`.
    pub async fn query_named<T: TypeSupport>(&self, name: &str) -> Result<Vec<T>> {
        let request = QueryMessages_Request {
            name: name.to_string(),
            type_name: T::type_name().to_string(),
        };
        let response = self.client.call(&request).await?;
        debug!(
            service = %self.client.fq_service_name(),
            name,
            count = response.messages.len(),
            "message store answered"
        );

        let messages = response
            .messages
            .into_iter()
            .map(serde_json::from_value)
            .collect::<std::result::Result<Vec<T>, _>>()
            .map_err(rosplan_core::Error::from)?;
        Ok(messages)
    }

    /// Service client used to reach the store.
    pub fn client(&self) -> &Client<QueryMessages> {
        &self.client
    }
}

impl rosplan_core::api::MessageStore for MessageStoreProxy {
    async fn query_named<T: TypeSupport>(&mut self, name: &str) -> rosplan_core::Result<Vec<T>> {
        Ok(MessageStoreProxy::query_named(self, name).await?)
    }
}
