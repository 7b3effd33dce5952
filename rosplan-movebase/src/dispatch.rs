//! Feeding dispatched actions to an [`ActionInterface`].

use crate::movebase::ActionInterface;
use rosplan_core::{
    Error, RosPublisher, RosSubscriber,
    interfaces::rosplan_dispatch_msgs::msg::{ActionDispatch, ActionFeedback},
};
use tracing::{debug, warn};

/// Runs an [`ActionInterface`] on the dispatch topic and reports on the
/// feedback topic.
///
/// Dispatches are handled one at a time, in arrival order.
pub struct ActionDispatcher<I, S, P> {
    interface: I,
    dispatches: S,
    feedback: P,
}

impl<I, S, P> ActionDispatcher<I, S, P>
where
    I: ActionInterface,
    S: RosSubscriber<ActionDispatch>,
    P: RosPublisher<ActionFeedback>,
{
    pub fn new(interface: I, dispatches: S, feedback: P) -> Self {
        Self {
            interface,
            dispatches,
            feedback,
        }
    }

    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Handle one dispatch.
    ///
    /// Returns `None` if the action is not ours, otherwise whether it was
    /// achieved.
    pub async fn handle(&mut self, msg: &ActionDispatch) -> Option<bool> {
        if msg.name != self.interface.action_name() {
            debug!(action = %msg.name, "ignoring dispatch for another interface");
            return None;
        }

        self.publish(msg.action_id, ActionFeedback::ENABLED);
        let achieved = self.interface.concrete_callback(msg).await;
        let status = if achieved {
            ActionFeedback::ACHIEVED
        } else {
            ActionFeedback::FAILED
        };
        self.publish(msg.action_id, status);
        Some(achieved)
    }

    /// Handle dispatches until the subscription closes.
    ///
    /// Malformed dispatches are skipped.
    pub async fn run(mut self) -> rosplan_core::Result<()> {
        loop {
            let msg = match self.dispatches.recv().await {
                Ok(msg) => msg,
                Err(Error::Serialization(e)) => {
                    warn!(topic = %self.dispatches.topic_name(), "dropping malformed dispatch: {}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            self.handle(&msg).await;
        }
    }

    fn publish(&self, action_id: i32, status: &str) {
        if let Err(e) = self.feedback.send(&ActionFeedback::new(action_id, status)) {
            warn!(
                topic = %self.feedback.topic_name(),
                action_id,
                "failed to publish feedback: {}",
                e
            );
        }
    }
}
