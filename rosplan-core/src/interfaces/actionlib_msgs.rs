//! `actionlib_msgs` and the envelopes wrapping goals and results on the wire.

pub mod msg {
    use crate::{action::GoalState, interfaces::std_msgs::msg::Header, msg::TypeSupport, time::Time};
    use serde::{Deserialize, Serialize};

    /// Identifies a goal. An empty id with a zero stamp addresses every goal.
    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct GoalID {
        pub stamp: Time,
        pub id: String,
    }

    impl GoalID {
        pub fn new(id: impl Into<String>) -> Self {
            Self {
                stamp: Time::now(),
                id: id.into(),
            }
        }

        /// Goal id used to cancel all goals.
        pub fn all() -> Self {
            Self::default()
        }

        pub fn is_all(&self) -> bool {
            self.id.is_empty() && self.stamp.is_zero()
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct GoalStatus {
        pub goal_id: GoalID,
        /// One of the codes of [`crate::action::status`].
        pub status: u8,
        pub text: String,
    }

    impl GoalStatus {
        pub fn state(&self) -> GoalState {
            self.status.into()
        }
    }

    crate::impl_type_support!(
        GoalID => "actionlib_msgs/msg/GoalID",
        GoalStatus => "actionlib_msgs/msg/GoalStatus",
    );

    /// A goal as published on the `goal` topic of an action.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ActionGoal<G> {
        pub header: Header,
        pub goal_id: GoalID,
        pub goal: G,
    }

    /// A result as published on the `result` topic of an action.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ActionResult<R> {
        pub header: Header,
        pub status: GoalStatus,
        pub result: R,
    }

    /// Feedback as published on the `feedback` topic of an action.
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ActionFeedback<F> {
        pub header: Header,
        pub status: GoalStatus,
        pub feedback: F,
    }

    impl<G: TypeSupport> TypeSupport for ActionGoal<G> {
        fn type_name() -> &'static str {
            "actionlib_msgs/msg/ActionGoal"
        }
    }

    impl<R: TypeSupport> TypeSupport for ActionResult<R> {
        fn type_name() -> &'static str {
            "actionlib_msgs/msg/ActionResult"
        }
    }

    impl<F: TypeSupport> TypeSupport for ActionFeedback<F> {
        fn type_name() -> &'static str {
            "actionlib_msgs/msg/ActionFeedback"
        }
    }

}
