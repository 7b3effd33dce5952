#![allow(dead_code)]

use parking_lot::Mutex;
use rosplan_core::{
    Error, GoalState, MessageStore, Result, RosActionClient, RosClient, RosPublisher,
    RosSubscriber, Time, TypeSupport,
    interfaces::{
        geometry_msgs::msg::PoseStamped,
        move_base_msgs::action::{MoveBase, MoveBaseGoal},
        rosplan_dispatch_msgs::msg::{ActionDispatch, ActionFeedback},
        rosplan_knowledge_msgs::srv::{
            KnowledgeUpdateService, KnowledgeUpdateService_Request,
            KnowledgeUpdateService_Response,
        },
        std_srvs::srv::{Empty, Empty_Request, Empty_Response},
    },
};
use rosplan_movebase::{MoveBaseConfig, MoveBaseInterface};
use std::{borrow::Cow, sync::Arc, time::Duration};
use tokio::sync::mpsc;

/// Everything the collaborators were asked to do.
#[derive(Debug, Default)]
pub struct Calls {
    pub queries: Vec<String>,
    pub goals: Vec<MoveBaseGoal>,
    pub timeouts: Vec<Option<Duration>>,
    pub cancels: usize,
    pub knowledge: Vec<KnowledgeUpdateService_Request>,
    pub clear_costmaps: usize,
}

pub type SharedCalls = Arc<Mutex<Calls>>;

/// How the fake move_base ends a goal.
#[derive(Debug, Clone, Copy)]
pub enum Outcome {
    Finish(GoalState),
    TimeOut,
}

pub struct MockActionClient {
    calls: SharedCalls,
    outcome: Outcome,
    state: GoalState,
    available: bool,
}

impl RosActionClient<MoveBase> for MockActionClient {
    fn action_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("/move_base")
    }

    async fn is_server_available(&self) -> bool {
        self.available
    }

    async fn send_goal(&mut self, goal: &MoveBaseGoal) -> Result<()> {
        self.calls.lock().goals.push(goal.clone());
        self.state = GoalState::Pending;
        Ok(())
    }

    async fn wait_for_result(&mut self, timeout: Option<Duration>) -> Result<bool> {
        self.calls.lock().timeouts.push(timeout);
        match self.outcome {
            Outcome::Finish(state) => {
                self.state = state;
                Ok(true)
            }
            Outcome::TimeOut => Ok(false),
        }
    }

    fn state(&self) -> GoalState {
        self.state
    }

    async fn cancel_all_goals(&mut self) -> Result<()> {
        self.calls.lock().cancels += 1;
        Ok(())
    }
}

/// `None` makes every query fail.
pub struct MockStore {
    calls: SharedCalls,
    poses: Option<Vec<PoseStamped>>,
}

impl MessageStore for MockStore {
    async fn query_named<T: TypeSupport>(&mut self, name: &str) -> Result<Vec<T>> {
        self.calls.lock().queries.push(name.to_string());
        let Some(poses) = &self.poses else {
            return Err(Error::ServiceNotAvailable("/message_store/query_messages".to_string()));
        };
        poses
            .iter()
            .map(|pose| T::from_bytes(&pose.to_bytes()?))
            .collect()
    }
}

pub struct MockKnowledgeClient {
    calls: SharedCalls,
    fail: bool,
}

impl RosClient<KnowledgeUpdateService> for MockKnowledgeClient {
    fn service_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("/kcl_rosplan/update_knowledge_base")
    }

    async fn call(
        &mut self,
        request: &KnowledgeUpdateService_Request,
    ) -> Result<KnowledgeUpdateService_Response> {
        self.calls.lock().knowledge.push(request.clone());
        if self.fail {
            return Err(Error::Timeout);
        }
        Ok(KnowledgeUpdateService_Response { success: true })
    }
}

pub struct MockClearCostmaps {
    calls: SharedCalls,
    fail: bool,
}

impl RosClient<Empty> for MockClearCostmaps {
    fn service_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("/move_base/clear_costmaps")
    }

    async fn call(&mut self, _request: &Empty_Request) -> Result<Empty_Response> {
        self.calls.lock().clear_costmaps += 1;
        if self.fail {
            return Err(Error::ServiceNotAvailable("/move_base/clear_costmaps".to_string()));
        }
        Ok(Empty_Response {})
    }
}

pub type MockInterface =
    MoveBaseInterface<MockActionClient, MockStore, MockKnowledgeClient, MockClearCostmaps>;

/// Builds an interface wired to mocks.
pub struct Harness {
    pub config: MoveBaseConfig,
    pub outcome: Outcome,
    pub poses: Option<Vec<PoseStamped>>,
    pub services_fail: bool,
    pub server_available: bool,
}

impl Default for Harness {
    fn default() -> Self {
        Self {
            config: test_config(),
            outcome: Outcome::Finish(GoalState::Succeeded),
            poses: Some(vec![waypoint(1.0, 2.0)]),
            services_fail: false,
            server_available: true,
        }
    }
}

impl Harness {
    pub fn build(self) -> (MockInterface, SharedCalls) {
        let calls = SharedCalls::default();
        let interface = MoveBaseInterface::new(
            self.config,
            MockActionClient {
                calls: calls.clone(),
                outcome: self.outcome,
                state: GoalState::default(),
                available: self.server_available,
            },
            MockStore {
                calls: calls.clone(),
                poses: self.poses,
            },
            MockKnowledgeClient {
                calls: calls.clone(),
                fail: self.services_fail,
            },
            MockClearCostmaps {
                calls: calls.clone(),
                fail: self.services_fail,
            },
        );
        (interface, calls)
    }
}

pub fn test_config() -> MoveBaseConfig {
    let mut config = MoveBaseConfig::default();
    config.settle_time = Duration::from_millis(10);
    config.goal_timeout = Some(Duration::from_secs(5));
    config
}

/// A stored waypoint. The stamp is fixed so fixtures compare equal.
pub fn waypoint(x: f64, y: f64) -> PoseStamped {
    let mut pose = PoseStamped::new_2d("map", x, y, 0.0);
    pose.header.stamp = Time::zero();
    pose
}

pub fn goto(action_id: i32, to: &str) -> ActionDispatch {
    ActionDispatch::new(action_id, "goto_waypoint")
        .with_parameter("from", "wp0")
        .with_parameter("to", to)
}

// ============================================================================
// Topics
// ============================================================================

pub struct MockSubscriber {
    receiver: mpsc::UnboundedReceiver<Result<ActionDispatch>>,
}

impl RosSubscriber<ActionDispatch> for MockSubscriber {
    fn topic_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("/kcl_rosplan/action_dispatch")
    }

    async fn recv(&mut self) -> Result<ActionDispatch> {
        self.receiver.recv().await.unwrap_or(Err(Error::ChannelClosed))
    }

    fn try_recv(&mut self) -> Result<Option<ActionDispatch>> {
        match self.receiver.try_recv() {
            Ok(msg) => msg.map(Some),
            Err(mpsc::error::TryRecvError::Empty) => Ok(None),
            Err(mpsc::error::TryRecvError::Disconnected) => Err(Error::ChannelClosed),
        }
    }
}

pub fn dispatch_topic() -> (mpsc::UnboundedSender<Result<ActionDispatch>>, MockSubscriber) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (sender, MockSubscriber { receiver })
}

#[derive(Clone, Default)]
pub struct MockPublisher {
    pub sent: Arc<Mutex<Vec<ActionFeedback>>>,
}

impl RosPublisher<ActionFeedback> for MockPublisher {
    fn topic_name(&self) -> Cow<'_, str> {
        Cow::Borrowed("/kcl_rosplan/action_feedback")
    }

    fn send(&self, msg: &ActionFeedback) -> Result<()> {
        self.sent.lock().push(msg.clone());
        Ok(())
    }
}
