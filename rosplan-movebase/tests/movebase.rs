pub mod common;

use common::{Harness, Outcome, goto, waypoint};
use rosplan_core::{
    GoalState,
    interfaces::{
        diagnostic_msgs::msg::KeyValue,
        rosplan_dispatch_msgs::msg::ActionDispatch,
        rosplan_knowledge_msgs::{msg::KnowledgeType, srv::UpdateType},
    },
};
use rosplan_movebase::{ActionInterface, DispatchError};
use std::time::Duration;

#[tokio::test]
async fn test_success_updates_knowledge() {
    let (mut interface, calls) = Harness::default().build();

    assert!(interface.concrete_callback(&goto(1, "wp3")).await);

    let calls = calls.lock();
    assert_eq!(calls.queries, ["wp3"]);
    assert_eq!(calls.goals.len(), 1);
    assert_eq!(calls.goals[0].target_pose, waypoint(1.0, 2.0));
    assert_eq!(calls.timeouts, [Some(Duration::from_secs(5))]);
    assert_eq!(calls.cancels, 0);
    assert_eq!(calls.clear_costmaps, 0);

    assert_eq!(calls.knowledge.len(), 2);
    let remove = &calls.knowledge[0];
    assert_eq!(remove.update_type, UpdateType::RemoveKnowledge);
    assert_eq!(remove.knowledge.knowledge_type, KnowledgeType::Fact);
    assert_eq!(remove.knowledge.attribute_name, "robot_at");
    assert_eq!(remove.knowledge.values, [KeyValue::new("v", "kenny")]);

    let add = &calls.knowledge[1];
    assert_eq!(add.update_type, UpdateType::AddKnowledge);
    assert_eq!(add.knowledge.attribute_name, "robot_at");
    assert_eq!(
        add.knowledge.values,
        [KeyValue::new("v", "kenny"), KeyValue::new("wp", "wp3")]
    );
}

#[tokio::test]
async fn test_success_waits_for_settle_time() {
    let mut harness = Harness::default();
    harness.config.settle_time = Duration::from_millis(200);
    let (mut interface, _) = harness.build();

    let start = std::time::Instant::now();
    assert!(interface.execute(&goto(1, "wp3")).await.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_robot_name_from_config() {
    let mut harness = Harness::default();
    harness.config.robot_name = "bob".to_string();
    let (mut interface, calls) = harness.build();

    assert!(interface.concrete_callback(&goto(1, "wp1")).await);
    assert_eq!(
        calls.lock().knowledge[1].knowledge.values,
        [KeyValue::new("v", "bob"), KeyValue::new("wp", "wp1")]
    );
}

#[tokio::test]
async fn test_missing_waypoint_parameter() {
    let (mut interface, calls) = Harness::default().build();
    let msg = ActionDispatch::new(2, "goto_waypoint").with_parameter("from", "wp0");

    let err = interface.execute(&msg).await.unwrap_err();
    assert!(matches!(err, DispatchError::MissingParameter("to")));

    let calls = calls.lock();
    assert!(calls.queries.is_empty());
    assert!(calls.goals.is_empty());
}

#[tokio::test]
async fn test_last_waypoint_parameter_wins() {
    let (mut interface, calls) = Harness::default().build();
    let msg = goto(3, "wp1").with_parameter("to", "wp2");

    assert!(interface.concrete_callback(&msg).await);
    assert_eq!(calls.lock().queries, ["wp2"]);
}

#[tokio::test]
async fn test_store_unavailable() {
    let harness = Harness {
        poses: None,
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    let err = interface.execute(&goto(4, "wp3")).await.unwrap_err();
    assert!(matches!(err, DispatchError::StoreUnavailable(_)));
    assert!(calls.lock().goals.is_empty());
}

#[tokio::test]
async fn test_unknown_waypoint() {
    let harness = Harness {
        poses: Some(Vec::new()),
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    let err = interface.execute(&goto(5, "nowhere")).await.unwrap_err();
    assert!(matches!(err, DispatchError::UnknownWaypoint(ref wp) if wp == "nowhere"));

    let calls = calls.lock();
    assert!(calls.goals.is_empty());
    assert!(calls.knowledge.is_empty());
}

#[tokio::test]
async fn test_duplicate_waypoints_use_first() {
    let harness = Harness {
        poses: Some(vec![waypoint(5.0, 6.0), waypoint(7.0, 8.0)]),
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    assert!(interface.concrete_callback(&goto(6, "wp3")).await);
    assert_eq!(calls.lock().goals[0].target_pose, waypoint(5.0, 6.0));
}

#[tokio::test]
async fn test_navigation_failure_clears_costmaps() {
    for state in [
        GoalState::Aborted,
        GoalState::Rejected,
        GoalState::Preempted,
        GoalState::Recalled,
        GoalState::Lost,
    ] {
        let harness = Harness {
            outcome: Outcome::Finish(state),
            ..Default::default()
        };
        let (mut interface, calls) = harness.build();

        let err = interface.execute(&goto(7, "wp3")).await.unwrap_err();
        assert!(matches!(err, DispatchError::GoalFailed(s) if s == state));

        let calls = calls.lock();
        assert_eq!(calls.clear_costmaps, 1);
        assert_eq!(calls.cancels, 0);
        assert!(calls.knowledge.is_empty());
    }
}

#[tokio::test]
async fn test_clear_costmaps_failure_is_ignored() {
    let harness = Harness {
        outcome: Outcome::Finish(GoalState::Aborted),
        services_fail: true,
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    assert!(!interface.concrete_callback(&goto(8, "wp3")).await);
    assert_eq!(calls.lock().clear_costmaps, 1);
}

#[tokio::test]
async fn test_knowledge_failure_keeps_success() {
    let harness = Harness {
        services_fail: true,
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    assert!(interface.concrete_callback(&goto(9, "wp3")).await);
    assert_eq!(calls.lock().knowledge.len(), 2);
}

#[tokio::test]
async fn test_timeout_cancels_all_goals() {
    let harness = Harness {
        outcome: Outcome::TimeOut,
        ..Default::default()
    };
    let (mut interface, calls) = harness.build();

    let err = interface.execute(&goto(10, "wp3")).await.unwrap_err();
    assert!(matches!(err, DispatchError::TimedOut));

    let calls = calls.lock();
    assert_eq!(calls.cancels, 1);
    assert_eq!(calls.clear_costmaps, 0);
    assert!(calls.knowledge.is_empty());
}

#[tokio::test]
async fn test_no_timeout_waits_forever() {
    let mut harness = Harness::default();
    harness.config.goal_timeout = None;
    let (mut interface, calls) = harness.build();

    assert!(interface.concrete_callback(&goto(11, "wp3")).await);
    assert_eq!(calls.lock().timeouts, [None::<Duration>]);
}

#[tokio::test]
async fn test_wait_for_server() {
    let (interface, _) = Harness::default().build();
    tokio::time::timeout(Duration::from_secs(1), interface.wait_for_server())
        .await
        .expect("server is available");

    let harness = Harness {
        server_available: false,
        ..Default::default()
    };
    let (interface, _) = harness.build();
    let waited = tokio::time::timeout(Duration::from_millis(700), interface.wait_for_server()).await;
    assert!(waited.is_err());
}

#[test]
fn test_action_name() {
    let (interface, _) = Harness::default().build();
    assert_eq!(interface.action_name(), "goto_waypoint");
}
