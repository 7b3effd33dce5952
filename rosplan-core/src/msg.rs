//! Message traits for messages, services, and actions.
//!
//! Every message is encoded as JSON on the wire. The type name follows the ROS
//! convention `<package>/<kind>/<Name>` and is used for key expressions and
//! type matching.

use crate::Result;
use serde::{Serialize, de::DeserializeOwned};

/// Trait for types that can be sent over a topic or as a request/response.
pub trait TypeSupport: Serialize + DeserializeOwned + 'static + Send + Sync {
    /// Returns the type name.
    ///
    /// Example: `"geometry_msgs/msg/PoseStamped"`
    fn type_name() -> &'static str;

    /// Serialize this message to bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if serialization fails.
    fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize a message from bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if deserialization fails.
    fn from_bytes(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Trait for service types.
///
/// Services consist of a request and response message pair.
pub trait ServiceMsg: 'static + Send + Sync {
    /// The request message type.
    type Request: TypeSupport;

    /// The response message type.
    type Response: TypeSupport;

    /// Returns the service type name.
    ///
    /// Example: `"std_srvs/srv/Empty"`
    fn type_name() -> &'static str;
}

/// Trait for action types.
///
/// An action is driven through a goal, reports feedback while it runs and ends
/// with a result.
pub trait ActionMsg: 'static + Send + Sync {
    /// The goal content type.
    type Goal: TypeSupport + Clone;

    /// The result content type.
    type Result: TypeSupport;

    /// The feedback content type.
    type Feedback: TypeSupport;

    /// Returns the action type name.
    ///
    /// Example: `"move_base_msgs/action/MoveBase"`
    fn type_name() -> &'static str;
}

/// Implements [`TypeSupport`] for a list of types.
///
/// ```ignore
/// impl_type_support!(KeyValue => "diagnostic_msgs/msg/KeyValue");
/// ```
#[macro_export]
macro_rules! impl_type_support {
    ($($ty:ty => $name:expr),* $(,)?) => {
        $(
            impl $crate::msg::TypeSupport for $ty {
                fn type_name() -> &'static str {
                    $name
                }
            }
        )*
    };
}
