//! Service server.

use crate::{
    error::{Error, Result},
    keyexpr::topic_keyexpr,
    node::Node,
};
use rosplan_core::{ServiceMsg, TypeSupport};
use std::{marker::PhantomData, sync::Arc};
use zenoh::{Wait, query::Query};

/// Incoming service request with sender for response.
pub struct ServiceRequest<T: ServiceMsg> {
    /// Request data.
    pub request: T::Request,
    /// Query to reply to.
    query: Query,
    /// Phantom data for service type.
    _phantom: PhantomData<T>,
}

impl<T: ServiceMsg> ServiceRequest<T> {
    /// Send a response to this request.
    ///
    /// Consumes self to ensure only one response is sent.
    pub fn respond(self, response: T::Response) -> Result<()> {
        let payload = response.to_bytes()?;
        self.query
            .reply(self.query.key_expr().clone(), payload)
            .wait()?;
        Ok(())
    }
}

/// Service server.
///
/// Receives requests and sends responses.
///
/// # Example
///
/// ```ignore
/// let mut server = node.create_server::<Empty>("/move_base/clear_costmaps")?;
///
/// loop {
///     let request = server.recv().await?;
///     request.respond(Empty_Response {})?;
/// }
/// ```
pub struct Server<T: ServiceMsg> {
    /// Parent node.
    node: Arc<Node>,
    /// Service name.
    service_name: String,
    /// Fully qualified service name.
    fq_service_name: String,
    /// Request receiver channel.
    receiver: flume::Receiver<Query>,
    /// Zenoh queryable (kept alive).
    _queryable: zenoh::query::Queryable<()>,
    /// Phantom data for service type.
    _phantom: PhantomData<T>,
}

impl<T: ServiceMsg> Server<T> {
    /// Create a new service server.
    pub(crate) fn new(node: Arc<Node>, service_name: &str, fq_service_name: &str) -> Result<Self> {
        let key_expr = topic_keyexpr(node.context().domain_id(), fq_service_name, T::type_name());

        // Create channel for incoming requests
        let (sender, receiver) = flume::bounded(32);

        let queryable = node
            .context()
            .session()
            .declare_queryable(key_expr)
            .complete(true)
            .callback(move |query| {
                let _ = sender.try_send(query);
            })
            .wait()?;

        Ok(Server {
            node,
            service_name: service_name.to_string(),
            fq_service_name: fq_service_name.to_string(),
            receiver,
            _queryable: queryable,
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

    /// Receive a request asynchronously.
    ///
    /// Returns a `ServiceRequest` that can be used to send a response.
    pub async fn recv(&mut self) -> Result<ServiceRequest<T>> {
        let query = self
            .receiver
            .recv_async()
            .await
            .map_err(|_| Error::ChannelClosed)?;

        let payload = query
            .payload()
            .map(|p| p.to_bytes().to_vec())
            .unwrap_or_default();
        let request = T::Request::from_bytes(&payload)?;

        Ok(ServiceRequest {
            request,
            query,
            _phantom: PhantomData,
        })
    }

    /// Get the parent node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}
