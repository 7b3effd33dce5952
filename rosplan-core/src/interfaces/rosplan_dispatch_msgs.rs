//! `rosplan_dispatch_msgs`

pub mod msg {
    use crate::interfaces::diagnostic_msgs::msg::KeyValue;
    use serde::{Deserialize, Serialize};

    /// A grounded planning action the planner asks an interface to execute.
    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct ActionDispatch {
        pub action_id: i32,
        pub name: String,
        pub parameters: Vec<KeyValue>,
        pub duration: f32,
        pub dispatch_time: f64,
    }

    impl ActionDispatch {
        pub fn new(action_id: i32, name: impl Into<String>) -> Self {
            Self {
                action_id,
                name: name.into(),
                ..Default::default()
            }
        }

        /// Append a parameter (builder style).
        pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
            self.parameters.push(KeyValue::new(key, value));
            self
        }

        /// Value of the parameter named `key`.
        ///
        /// When the key appears more than once the last occurrence wins.
        pub fn parameter(&self, key: &str) -> Option<&str> {
            self.parameters
                .iter()
                .rev()
                .find(|kv| kv.key == key)
                .map(|kv| kv.value.as_str())
        }
    }

    /// Execution status reported back to the dispatcher.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct ActionFeedback {
        pub action_id: i32,
        pub status: String,
        pub information: Vec<KeyValue>,
    }

    impl ActionFeedback {
        pub const ENABLED: &'static str = "action enabled";
        pub const ACHIEVED: &'static str = "action achieved";
        pub const FAILED: &'static str = "action failed";

        pub fn new(action_id: i32, status: &str) -> Self {
            Self {
                action_id,
                status: status.to_string(),
                information: Vec::new(),
            }
        }
    }

    crate::impl_type_support!(
        ActionDispatch => "rosplan_dispatch_msgs/msg/ActionDispatch",
        ActionFeedback => "rosplan_dispatch_msgs/msg/ActionFeedback",
    );

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parameter_lookup() {
            let msg = ActionDispatch::new(3, "goto_waypoint")
                .with_parameter("v", "kenny")
                .with_parameter("from", "wp0")
                .with_parameter("to", "wp1");
            assert_eq!(msg.parameter("to"), Some("wp1"));
            assert_eq!(msg.parameter("from"), Some("wp0"));
            assert_eq!(msg.parameter("missing"), None);
        }

        #[test]
        fn test_parameter_last_occurrence_wins() {
            let msg = ActionDispatch::new(1, "goto_waypoint")
                .with_parameter("to", "wp1")
                .with_parameter("to", "wp7");
            assert_eq!(msg.parameter("to"), Some("wp7"));
        }

        #[test]
        fn test_parameter_key_is_case_sensitive() {
            let msg = ActionDispatch::new(1, "goto_waypoint").with_parameter("TO", "wp1");
            assert_eq!(msg.parameter("to"), None);
        }
    }
}
