//! Named message store.
//!
//! Messages are stored as JSON documents under a name and a type name; a query
//! returns every document matching both.

pub mod srv {
    use crate::msg::ServiceMsg;
    use serde::{Deserialize, Serialize};

    /// Query stored messages by name.
    pub struct QueryMessages;

    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct QueryMessages_Request {
        pub name: String,
        pub type_name: String,
    }

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct QueryMessages_Response {
        pub messages: Vec<serde_json::Value>,
    }

    impl ServiceMsg for QueryMessages {
        type Request = QueryMessages_Request;
        type Response = QueryMessages_Response;

        fn type_name() -> &'static str {
            "mongodb_store_msgs/srv/MongoQueryMsg"
        }
    }

    crate::impl_type_support!(
        QueryMessages_Request => "mongodb_store_msgs/srv/MongoQueryMsg_Request",
        QueryMessages_Response => "mongodb_store_msgs/srv/MongoQueryMsg_Response",
    );
}
