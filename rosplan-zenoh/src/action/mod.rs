//! Actions
//!
//! Actions use the actionlib topic layout below the action namespace:
//!
//! | topic | type |
//! |-------|------|
//! | `<action>/goal` | [`ActionGoal<T::Goal>`](rosplan_core::interfaces::actionlib_msgs::msg::ActionGoal) |
//! | `<action>/cancel` | [`GoalID`](rosplan_core::interfaces::actionlib_msgs::msg::GoalID) |
//! | `<action>/result` | [`ActionResult<T::Result>`](rosplan_core::interfaces::actionlib_msgs::msg::ActionResult) |
//!
//! An action server announces itself with a liveliness token on
//! [`action_liveliness_keyexpr`](crate::action_liveliness_keyexpr).

pub mod client;

/// Topic carrying goals.
pub const GOAL_TOPIC: &str = "goal";
/// Topic carrying cancel requests.
pub const CANCEL_TOPIC: &str = "cancel";
/// Topic carrying results.
pub const RESULT_TOPIC: &str = "result";

/// Name of the `topic` of the action `fq_action_name`.
pub fn action_topic(fq_action_name: &str, topic: &str) -> String {
    format!("{}/{}", fq_action_name.trim_end_matches('/'), topic)
}
