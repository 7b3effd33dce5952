//! Service client.

use crate::{
    error::{Error, Result},
    keyexpr::topic_keyexpr,
    node::Node,
};
use rosplan_core::{ServiceMsg, TypeSupport};
use std::{borrow::Cow, marker::PhantomData, sync::Arc, time::Duration};
use tracing::{debug, warn};
use zenoh::query::QueryTarget;

/// Call timeout used when none is given.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Service client.
///
/// Sends requests to a service server and receives responses.
///
/// # Example
///
/// ```ignore
/// let mut client = node.create_client::<Empty>("/move_base/clear_costmaps", None)?;
/// let response = client.call(&Empty_Request {}).await?;
/// ```
pub struct Client<T: ServiceMsg> {
    /// Parent node.
    node: Arc<Node>,
    /// Service name.
    service_name: String,
    /// Fully qualified service name.
    fq_service_name: String,
    /// Key expression for queries.
    key_expr: String,
    /// Timeout of a single call.
    timeout: Duration,
    /// Phantom data for service type.
    _phantom: PhantomData<T>,
}

impl<T: ServiceMsg> Client<T> {
    /// Create a new service client.
    ///
    /// # Arguments
    ///
    /// * `node` - Parent node
    /// * `service_name` - Original service name (for display)
    /// * `fq_service_name` - Fully qualified service name (already expanded)
    /// * `timeout` - Call timeout
    pub(crate) fn new(
        node: Arc<Node>,
        service_name: &str,
        fq_service_name: &str,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let key_expr = topic_keyexpr(node.context().domain_id(), fq_service_name, T::type_name());

        Ok(Client {
            node,
            service_name: service_name.to_string(),
            fq_service_name: fq_service_name.to_string(),
            key_expr,
            timeout: timeout.unwrap_or(DEFAULT_CALL_TIMEOUT),
            _phantom: PhantomData,
        })
    }

    /// Get the service name.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Get the fully qualified service name.
    pub fn fq_service_name(&self) -> &str {
        &self.fq_service_name
    }

    /// Send a request and wait for a response.
    ///
    /// The first reply carrying a valid response wins. Undecodable replies
    /// are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The query fails
    /// - No server sent a valid reply before the timeout
    pub async fn call(&self, request: &T::Request) -> Result<T::Response> {
        let payload = request.to_bytes()?;
        debug!(service = %self.fq_service_name, "sending request");

        let replies = self
            .node
            .context()
            .session()
            .get(&self.key_expr)
            .payload(payload)
            .target(QueryTarget::BestMatching)
            .timeout(self.timeout)
            .await?;

        while let Ok(reply) = replies.recv_async().await {
            match reply.result() {
                Ok(sample) => match T::Response::from_bytes(&sample.payload().to_bytes()) {
                    Ok(response) => return Ok(response),
                    Err(e) => {
                        warn!(service = %self.fq_service_name, "undecodable reply: {}", e);
                    }
                },
                Err(e) => {
                    warn!(service = %self.fq_service_name, "error reply: {:?}", e);
                }
            }
        }

        Err(Error::ServiceNotAvailable(self.fq_service_name.clone()))
    }

    /// Get the parent node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

// ============================================================================
// RosClient trait implementation
// ============================================================================

impl<T: ServiceMsg> rosplan_core::api::RosClient<T> for Client<T> {
    fn service_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(Client::service_name(self))
    }

    async fn call(&mut self, request: &T::Request) -> rosplan_core::Result<T::Response> {
        Ok(Client::call(self, request).await?)
    }
}
