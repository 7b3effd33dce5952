//! `move_base_msgs`

pub mod action {
    use crate::{interfaces::geometry_msgs::msg::PoseStamped, msg::ActionMsg};
    use serde::{Deserialize, Serialize};

    /// Move the robot base to a pose.
    pub struct MoveBase;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct MoveBaseGoal {
        pub target_pose: PoseStamped,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct MoveBaseResult {}

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    pub struct MoveBaseFeedback {
        pub base_position: PoseStamped,
    }

    impl ActionMsg for MoveBase {
        type Goal = MoveBaseGoal;
        type Result = MoveBaseResult;
        type Feedback = MoveBaseFeedback;

        fn type_name() -> &'static str {
            "move_base_msgs/action/MoveBase"
        }
    }

    crate::impl_type_support!(
        MoveBaseGoal => "move_base_msgs/action/MoveBaseGoal",
        MoveBaseResult => "move_base_msgs/action/MoveBaseResult",
        MoveBaseFeedback => "move_base_msgs/action/MoveBaseFeedback",
    );
}
