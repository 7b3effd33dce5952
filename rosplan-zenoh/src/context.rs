//! Zenoh context (session) management.
//!
//! A [`Context`] wraps a Zenoh session and provides the foundation for
//! creating nodes and entities.

use crate::{
    error::{Error, Result},
    keyexpr::validate_name,
    node::Node,
};
use std::{env, sync::Arc};
use tracing::debug;
use zenoh::{Session, Wait};

/// Environment variable for custom Zenoh session config.
pub const ZENOH_SESSION_CONFIG_URI: &str = "ZENOH_SESSION_CONFIG_URI";

/// Environment variable for ROS domain ID.
pub const ROS_DOMAIN_ID: &str = "ROS_DOMAIN_ID";

/// Default Zenoh router endpoint.
pub const DEFAULT_ROUTER_ENDPOINT: &str = "tcp/localhost:7447";

/// Inner context data.
struct ContextInner {
    /// Zenoh session.
    session: Session,
    /// ROS domain ID.
    domain_id: u32,
    /// Session ID as hex string.
    session_id: String,
}

/// Context wrapping a Zenoh session.
///
/// A context represents a single Zenoh session and can contain multiple nodes.
/// All nodes within a context share the same session for communication.
///
/// # Example
///
/// ```ignore
/// let ctx = Context::new()?;
/// let node = ctx.create_node("my_node", None)?;
/// ```
#[derive(Clone)]
pub struct Context {
    inner: Arc<ContextInner>,
}

impl Context {
    /// Create a new context with default configuration.
    ///
    /// This will:
    /// 1. Read `ROS_DOMAIN_ID` from environment (default: 0)
    /// 2. Read `ZENOH_SESSION_CONFIG_URI` for custom config (optional)
    /// 3. Open a Zenoh session in peer mode connecting to localhost:7447
    ///
    /// # Errors
    ///
    /// Returns an error if the Zenoh session cannot be opened.
    pub fn new() -> Result<Self> {
        // Get domain ID from environment
        let domain_id = env::var(ROS_DOMAIN_ID)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);

        Self::with_domain_id(domain_id)
    }

    /// Create a new context with a specific domain ID.
    pub fn with_domain_id(domain_id: u32) -> Result<Self> {
        let config = if let Ok(config_uri) = env::var(ZENOH_SESSION_CONFIG_URI) {
            zenoh::Config::from_file(&config_uri)
                .map_err(|e| Error::InvalidConfig(format!("Failed to load config: {}", e)))?
        } else {
            // Default config: peer mode, connect to local router
            let mut config = zenoh::Config::default();
            config
                .insert_json5(
                    "connect/endpoints",
                    &format!("[\"{}\"]", DEFAULT_ROUTER_ENDPOINT),
                )
                .map_err(|e| Error::InvalidConfig(format!("Failed to set endpoints: {}", e)))?;
            config
        };

        Self::with_config(domain_id, config)
    }

    /// Create a new context with custom Zenoh configuration.
    pub fn with_config(domain_id: u32, config: zenoh::Config) -> Result<Self> {
        let session = zenoh::open(config).wait()?;

        // ZenohId Display provides hex format
        let session_id = session.zid().to_string();
        debug!(domain_id, session_id, "zenoh session opened");

        Ok(Context {
            inner: Arc::new(ContextInner {
                session,
                domain_id,
                session_id,
            }),
        })
    }

    /// Get the ROS domain ID.
    pub fn domain_id(&self) -> u32 {
        self.inner.domain_id
    }

    /// Get the Zenoh session ID as a hex string.
    pub fn session_id(&self) -> &str {
        &self.inner.session_id
    }

    /// Get a reference to the Zenoh session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Create a new node.
    ///
    /// # Arguments
    ///
    /// * `name` - Node name (a single token: alphanumerics and `_`)
    /// * `namespace` - Optional namespace (defaults to the root namespace)
    ///
    /// # Errors
    ///
    /// Returns an error if the name or namespace is invalid.
    pub fn create_node(&self, name: &str, namespace: Option<&str>) -> Result<Arc<Node>> {
        if name.is_empty() || name.contains(['/', '~']) {
            return Err(rosplan_core::Error::invalid_name(name, "node name must be a single token").into());
        }
        validate_name(name)?;

        let namespace = namespace.unwrap_or("");
        if !namespace.is_empty() {
            if !namespace.starts_with('/') {
                return Err(
                    rosplan_core::Error::invalid_name(namespace, "namespace must be absolute").into(),
                );
            }
            validate_name(namespace)?;
        }

        Ok(Node::new(self.clone(), name, namespace))
    }
}
