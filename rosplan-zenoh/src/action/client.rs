//! Action client.

use super::{CANCEL_TOPIC, GOAL_TOPIC, RESULT_TOPIC, action_topic};
use crate::{
    error::{Error, Result},
    keyexpr::action_liveliness_keyexpr,
    node::Node,
    topic::{publisher::Publisher, subscriber::Subscriber},
};
use rosplan_core::{
    ActionMsg, GoalState,
    interfaces::{
        actionlib_msgs::msg::{ActionGoal, ActionResult, GoalID},
        std_msgs::msg::Header,
    },
};
use std::{borrow::Cow, sync::Arc, time::Duration};
use tracing::{debug, trace};

/// Results kept while no one is waiting.
const RESULT_DEPTH: usize = 32;

/// Time allowed to the liveliness query of [`ActionClient::is_server_available`].
const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(1);

/// A simple action client.
///
/// Tracks a single goal at a time: sending a goal forgets the previous one.
///
/// # Example
///
/// ```ignore
/// let mut client = node.create_action_client::<MoveBase>("/move_base")?;
/// client.send_goal(&goal)?;
/// if client.wait_for_result(Some(Duration::from_secs(60))).await? {
///     println!("finished: {}", client.state());
/// } else {
///     client.cancel_all_goals()?;
/// }
/// ```
pub struct ActionClient<T: ActionMsg> {
    /// Parent node.
    node: Arc<Node>,
    /// Action name.
    action_name: String,
    /// Fully qualified action name.
    fq_action_name: String,
    goal_publisher: Publisher<ActionGoal<T::Goal>>,
    cancel_publisher: Publisher<GoalID>,
    result_subscriber: Subscriber<ActionResult<T::Result>>,
    /// Goal being tracked.
    goal_id: Option<GoalID>,
    /// State of the tracked goal.
    state: GoalState,
    /// Result of the tracked goal, once done.
    result: Option<T::Result>,
}

impl<T: ActionMsg> ActionClient<T> {
    /// Create an action client.
    pub(crate) fn new(node: Arc<Node>, action_name: &str, fq_action_name: &str) -> Result<Self> {
        let goal_publisher = Publisher::new(
            node.clone(),
            GOAL_TOPIC,
            &action_topic(fq_action_name, GOAL_TOPIC),
        )?;
        let cancel_publisher = Publisher::new(
            node.clone(),
            CANCEL_TOPIC,
            &action_topic(fq_action_name, CANCEL_TOPIC),
        )?;
        let result_subscriber = Subscriber::new(
            node.clone(),
            RESULT_TOPIC,
            &action_topic(fq_action_name, RESULT_TOPIC),
            Some(RESULT_DEPTH),
        )?;

        Ok(Self {
            node,
            action_name: action_name.to_string(),
            fq_action_name: fq_action_name.to_string(),
            goal_publisher,
            cancel_publisher,
            result_subscriber,
            goal_id: None,
            state: GoalState::default(),
            result: None,
        })
    }

    /// Get the action name.
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// Get the fully qualified action name.
    pub fn fq_action_name(&self) -> &str {
        &self.fq_action_name
    }

    /// Returns true if an action server announced itself for this action.
    pub async fn is_server_available(&self) -> Result<bool> {
        let key = action_liveliness_keyexpr(
            self.node.context().domain_id(),
            &self.fq_action_name,
            T::type_name(),
        );
        let replies = self
            .node
            .context()
            .session()
            .liveliness()
            .get(key)
            .timeout(AVAILABILITY_TIMEOUT)
            .await?;
        while let Ok(reply) = replies.recv_async().await {
            if reply.result().is_ok() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Send a goal, replacing the goal being tracked.
    pub fn send_goal(&mut self, goal: &T::Goal) -> Result<()> {
        let goal_id = GoalID::new(uuid::Uuid::new_v4().to_string());
        let msg = ActionGoal {
            header: Header::now(""),
            goal_id: goal_id.clone(),
            goal: goal.clone(),
        };
        self.goal_publisher.send(&msg)?;
        debug!(action = %self.fq_action_name, goal_id = %goal_id.id, "goal sent");

        self.goal_id = Some(goal_id);
        self.state = GoalState::Pending;
        self.result = None;
        Ok(())
    }

    /// Wait for the result of the tracked goal.
    ///
    /// Returns `Ok(false)` if `timeout` elapsed first, `None` waits forever.
    /// Results of other goals are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if no goal was sent or the result subscription closed.
    pub async fn wait_for_result(&mut self, timeout: Option<Duration>) -> Result<bool> {
        let Some(goal_id) = self.goal_id.as_ref().map(|g| g.id.clone()) else {
            return Err(Error::NoGoal(self.fq_action_name.clone()));
        };
        if self.state.is_done() {
            return Ok(true);
        }

        let subscriber = &mut self.result_subscriber;
        let wait = async move {
            loop {
                let msg = subscriber.recv().await?;
                if msg.status.goal_id.id == goal_id {
                    return Ok::<_, Error>(msg);
                }
                trace!(goal_id = %msg.status.goal_id.id, "discarding result of another goal");
            }
        };

        let msg = match timeout {
            Some(t) => match tokio::time::timeout(t, wait).await {
                Ok(msg) => msg?,
                Err(_) => return Ok(false),
            },
            None => wait.await?,
        };

        self.state = msg.status.state();
        self.result = Some(msg.result);
        Ok(true)
    }

    /// State of the tracked goal.
    pub fn state(&self) -> GoalState {
        self.state
    }

    /// Result of the tracked goal, if it is done.
    pub fn result(&self) -> Option<&T::Result> {
        self.result.as_ref()
    }

    /// Cancel every goal running on the action server.
    pub fn cancel_all_goals(&mut self) -> Result<()> {
        self.cancel_publisher.send(&GoalID::all())?;
        debug!(action = %self.fq_action_name, "cancel all goals");
        Ok(())
    }

    /// Get the parent node.
    pub fn node(&self) -> &Arc<Node> {
        &self.node
    }
}

// ============================================================================
// RosActionClient trait implementation
// ============================================================================

impl<T: ActionMsg> rosplan_core::api::RosActionClient<T> for ActionClient<T> {
    fn action_name(&self) -> Cow<'_, str> {
        Cow::Borrowed(ActionClient::action_name(self))
    }

    async fn is_server_available(&self) -> bool {
        ActionClient::is_server_available(self)
            .await
            .unwrap_or(false)
    }

    async fn send_goal(&mut self, goal: &T::Goal) -> rosplan_core::Result<()> {
        Ok(ActionClient::send_goal(self, goal)?)
    }

    async fn wait_for_result(&mut self, timeout: Option<Duration>) -> rosplan_core::Result<bool> {
        Ok(ActionClient::wait_for_result(self, timeout).await?)
    }

    fn state(&self) -> GoalState {
        self.state
    }

    async fn cancel_all_goals(&mut self) -> rosplan_core::Result<()> {
        Ok(ActionClient::cancel_all_goals(self)?)
    }
}
