//! The `goto_waypoint` action interface.
//!
//! A dispatched `goto_waypoint` action names its destination in the `to`
//! parameter. The waypoint is looked up in the message store, sent to
//! move_base, and once the robot got there the knowledge base learns the new
//! `robot_at` fact.

use crate::config::MoveBaseConfig;
use rosplan_core::{
    GoalState, MessageStore, RosActionClient, RosClient,
    interfaces::{
        diagnostic_msgs::msg::KeyValue,
        geometry_msgs::msg::PoseStamped,
        move_base_msgs::action::{MoveBase, MoveBaseGoal},
        rosplan_dispatch_msgs::msg::ActionDispatch,
        rosplan_knowledge_msgs::{
            msg::KnowledgeItem,
            srv::{KnowledgeUpdateService, KnowledgeUpdateService_Request, UpdateType},
        },
        std_srvs::srv::{Empty, Empty_Request},
    },
};
use std::{future::Future, time::Duration};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Parameter of the PDDL action naming the destination.
pub const WAYPOINT_PARAMETER: &str = "to";

/// Predicate updated when the robot arrives.
pub const ROBOT_AT: &str = "robot_at";

/// Period between two availability checks of the action server.
pub const SERVER_POLL_PERIOD: Duration = Duration::from_millis(500);

/// Why a dispatched action failed.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("PDDL action missing required parameter ?{0}")]
    MissingParameter(&'static str),

    #[error("query to sceneDB failed: {0}")]
    StoreUnavailable(#[source] rosplan_core::Error),

    #[error("no matching wpID {0}")]
    UnknownWaypoint(String),

    #[error("action finished: {0}")]
    GoalFailed(GoalState),

    #[error("action timed out")]
    TimedOut,

    #[error("{0}")]
    Transport(#[from] rosplan_core::Error),
}

/// An interface between the planning system and whatever executes one kind
/// of action.
pub trait ActionInterface: Send {
    /// Name of the PDDL action handled.
    fn action_name(&self) -> &str;

    /// Execute a dispatched action, returns true once it is achieved.
    fn concrete_callback(&mut self, msg: &ActionDispatch) -> impl Future<Output = bool> + Send;
}

/// Executes `goto_waypoint` actions with move_base.
pub struct MoveBaseInterface<A, S, K, C> {
    config: MoveBaseConfig,
    action_client: A,
    message_store: S,
    knowledge_client: K,
    clear_costmaps_client: C,
    log_prefix: String,
}

impl<A, S, K, C> MoveBaseInterface<A, S, K, C>
where
    A: RosActionClient<MoveBase>,
    S: MessageStore,
    K: RosClient<KnowledgeUpdateService>,
    C: RosClient<Empty>,
{
    pub fn new(
        config: MoveBaseConfig,
        action_client: A,
        message_store: S,
        knowledge_client: K,
        clear_costmaps_client: C,
    ) -> Self {
        let log_prefix = format!("KCL: ({})", config.pddl_action_name);
        info!(
            "{} waiting for action server to start on {}",
            log_prefix, config.action_server
        );
        Self {
            config,
            action_client,
            message_store,
            knowledge_client,
            clear_costmaps_client,
            log_prefix,
        }
    }

    pub fn config(&self) -> &MoveBaseConfig {
        &self.config
    }

    /// Poll until the action server is available.
    pub async fn wait_for_server(&self) {
        while !self.action_client.is_server_available().await {
            tokio::time::sleep(SERVER_POLL_PERIOD).await;
        }
        info!("{} action server {} is up", self.log_prefix, self.config.action_server);
    }

    /// Move to the waypoint named by the `to` parameter of `msg`.
    ///
    /// # Errors
    ///
    /// See [`DispatchError`]. Failures of the knowledge base update and of
    /// clearing the costmaps are logged only.
    pub async fn execute(&mut self, msg: &ActionDispatch) -> Result<(), DispatchError> {
        let Some(wp_id) = msg.parameter(WAYPOINT_PARAMETER).map(str::to_string) else {
            info!(
                "{} aborting action dispatch; PDDL action missing required parameter ?{}",
                self.log_prefix, WAYPOINT_PARAMETER
            );
            return Err(DispatchError::MissingParameter(WAYPOINT_PARAMETER));
        };

        let poses = match self.message_store.query_named::<PoseStamped>(&wp_id).await {
            Ok(poses) => poses,
            Err(e) => {
                info!("{} aborting action dispatch; query to sceneDB failed", self.log_prefix);
                debug!("{} message store error: {}", self.log_prefix, e);
                return Err(DispatchError::StoreUnavailable(e));
            }
        };
        if poses.len() > 1 {
            info!("{} multiple waypoints share the same wpID", self.log_prefix);
        }
        let Some(target_pose) = poses.into_iter().next() else {
            info!(
                "{} aborting action dispatch; no matching wpID {}",
                self.log_prefix, wp_id
            );
            return Err(DispatchError::UnknownWaypoint(wp_id));
        };

        self.action_client
            .send_goal(&MoveBaseGoal { target_pose })
            .await?;
        let finished = self
            .action_client
            .wait_for_result(self.config.goal_timeout)
            .await?;

        if !finished {
            if let Err(e) = self.action_client.cancel_all_goals().await {
                warn!("{} failed to cancel goals: {}", self.log_prefix, e);
            }
            info!("{} action timed out", self.log_prefix);
            return Err(DispatchError::TimedOut);
        }

        let state = self.action_client.state();
        info!("{} action finished: {}", self.log_prefix, state);

        if state != GoalState::Succeeded {
            self.clear_costmaps().await;
            return Err(DispatchError::GoalFailed(state));
        }

        self.update_robot_location(&wp_id).await;
        tokio::time::sleep(self.config.settle_time).await;
        Ok(())
    }

    /// Replace `robot_at(v)` by `robot_at(v, wp)`.
    async fn update_robot_location(&mut self, wp_id: &str) {
        let mut request = KnowledgeUpdateService_Request {
            update_type: UpdateType::RemoveKnowledge,
            knowledge: KnowledgeItem::fact(
                ROBOT_AT,
                vec![KeyValue::new("v", self.config.robot_name.as_str())],
            ),
        };
        self.update_knowledge(&request).await;

        // the added fact keeps the robot pair
        request.update_type = UpdateType::AddKnowledge;
        request.knowledge.values.push(KeyValue::new("wp", wp_id));
        self.update_knowledge(&request).await;
    }

    async fn update_knowledge(&mut self, request: &KnowledgeUpdateService_Request) {
        match self.knowledge_client.call(request).await {
            Ok(response) if response.success => {
                debug!("{} knowledge base updated: {:?}", self.log_prefix, request.update_type);
            }
            Ok(_) => warn!(
                "{} knowledge base rejected {:?} of {}",
                self.log_prefix, request.update_type, request.knowledge.attribute_name
            ),
            Err(e) => warn!(
                "{} failed to call {}: {}",
                self.log_prefix, self.config.knowledge_update_service, e
            ),
        }
    }

    async fn clear_costmaps(&mut self) {
        if let Err(e) = self.clear_costmaps_client.call(&Empty_Request {}).await {
            warn!(
                "{} failed to call {}: {}",
                self.log_prefix, self.config.clear_costmaps_service, e
            );
        }
    }
}

impl<A, S, K, C> ActionInterface for MoveBaseInterface<A, S, K, C>
where
    A: RosActionClient<MoveBase>,
    S: MessageStore,
    K: RosClient<KnowledgeUpdateService>,
    C: RosClient<Empty>,
{
    fn action_name(&self) -> &str {
        &self.config.pddl_action_name
    }

    async fn concrete_callback(&mut self, msg: &ActionDispatch) -> bool {
        match self.execute(msg).await {
            Ok(()) => true,
            Err(e) => {
                debug!("{} action {} failed: {}", self.log_prefix, msg.action_id, e);
                false
            }
        }
    }
}
