//! Action-related types and enums.

use std::fmt::{self, Display};

/// Raw status codes carried by `actionlib_msgs/GoalStatus`.
pub mod status {
    /// The goal has yet to be processed by the action server.
    pub const PENDING: u8 = 0;
    /// The goal is currently being processed by the action server.
    pub const ACTIVE: u8 = 1;
    /// The goal was canceled after it started executing.
    pub const PREEMPTED: u8 = 2;
    /// The goal was achieved successfully.
    pub const SUCCEEDED: u8 = 3;
    /// The goal was aborted during execution.
    pub const ABORTED: u8 = 4;
    /// The goal was rejected without being processed.
    pub const REJECTED: u8 = 5;
    /// The goal received a cancel request after it started executing.
    pub const PREEMPTING: u8 = 6;
    /// The goal received a cancel request before it started executing.
    pub const RECALLING: u8 = 7;
    /// The goal was canceled before it started executing.
    pub const RECALLED: u8 = 8;
    /// The goal is not tracked by the action server anymore.
    pub const LOST: u8 = 9;
}

/// State of a goal as seen by a simple action client.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum GoalState {
    /// Goal was sent but not processed yet.
    #[default]
    Pending,

    /// Goal is currently being executed.
    Active,

    /// Goal was canceled before execution started.
    Recalled,

    /// Goal was rejected by the action server.
    Rejected,

    /// Goal was canceled during execution.
    Preempted,

    /// Goal was aborted by the action server.
    Aborted,

    /// Goal completed successfully.
    Succeeded,

    /// Goal is lost.
    Lost,
}

impl GoalState {
    /// Returns true once the goal reached a terminal state.
    pub fn is_done(&self) -> bool {
        !matches!(self, GoalState::Pending | GoalState::Active)
    }

    /// Upper-case name of the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalState::Pending => "PENDING",
            GoalState::Active => "ACTIVE",
            GoalState::Recalled => "RECALLED",
            GoalState::Rejected => "REJECTED",
            GoalState::Preempted => "PREEMPTED",
            GoalState::Aborted => "ABORTED",
            GoalState::Succeeded => "SUCCEEDED",
            GoalState::Lost => "LOST",
        }
    }
}

impl Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<u8> for GoalState {
    fn from(s: u8) -> Self {
        match s {
            status::PENDING | status::RECALLING => GoalState::Pending,
            status::ACTIVE | status::PREEMPTING => GoalState::Active,
            status::PREEMPTED => GoalState::Preempted,
            status::SUCCEEDED => GoalState::Succeeded,
            status::ABORTED => GoalState::Aborted,
            status::REJECTED => GoalState::Rejected,
            status::RECALLED => GoalState::Recalled,
            _ => GoalState::Lost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_code() {
        assert_eq!(GoalState::from(status::SUCCEEDED), GoalState::Succeeded);
        assert_eq!(GoalState::from(status::ABORTED), GoalState::Aborted);
        assert_eq!(GoalState::from(status::PREEMPTING), GoalState::Active);
        assert_eq!(GoalState::from(status::RECALLING), GoalState::Pending);
        assert_eq!(GoalState::from(42), GoalState::Lost);
    }

    #[test]
    fn test_is_done() {
        assert!(!GoalState::Pending.is_done());
        assert!(!GoalState::Active.is_done());
        assert!(GoalState::Succeeded.is_done());
        assert!(GoalState::Rejected.is_done());
        assert!(GoalState::Lost.is_done());
    }

    #[test]
    fn test_display() {
        assert_eq!(GoalState::Succeeded.to_string(), "SUCCEEDED");
        assert_eq!(format!("{}", GoalState::Preempted), "PREEMPTED");
    }
}
