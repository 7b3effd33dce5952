//! `diagnostic_msgs`

pub mod msg {
    use serde::{Deserialize, Serialize};

    /// A key/value pair.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct KeyValue {
        pub key: String,
        pub value: String,
    }

    impl KeyValue {
        pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
            Self {
                key: key.into(),
                value: value.into(),
            }
        }
    }

    crate::impl_type_support!(KeyValue => "diagnostic_msgs/msg/KeyValue");
}
