use rosplan_core::{
    DynError,
    interfaces::{
        move_base_msgs::action::MoveBase,
        rosplan_dispatch_msgs::msg::{ActionDispatch, ActionFeedback},
        rosplan_knowledge_msgs::srv::KnowledgeUpdateService,
        std_srvs::srv::Empty,
    },
};
use rosplan_movebase::{
    ActionDispatcher, MoveBaseConfig, MoveBaseInterface, logger::init_ros_logging,
};
use rosplan_zenoh::Context;
use tracing::{info, warn};

/// Dispatches queued while an action runs.
const DISPATCH_QUEUE_DEPTH: usize = 1000;

#[tokio::main]
async fn main() -> Result<(), DynError> {
    let args: Vec<String> = std::env::args().collect();
    let config = MoveBaseConfig::from_args(&args)?;

    init_ros_logging(&config.node_name, config.log_level);
    for name in config.unknown_parameters() {
        warn!("ignoring unknown parameter {name}");
    }

    let ctx = Context::new()?;
    let node = ctx.create_node(&config.node_name, None)?;
    info!(node = %node.fully_qualified_name(), "node started");

    let action_client = node.create_action_client::<MoveBase>(&config.action_server)?;
    let message_store = node.create_message_store(&config.message_store_service, None)?;
    let knowledge_client =
        node.create_client::<KnowledgeUpdateService>(&config.knowledge_update_service, None)?;
    let clear_costmaps_client = node.create_client::<Empty>(&config.clear_costmaps_service, None)?;
    let dispatches = node
        .create_subscriber::<ActionDispatch>(&config.action_dispatch_topic, Some(DISPATCH_QUEUE_DEPTH))?;
    let feedback = node.create_publisher::<ActionFeedback>(&config.action_feedback_topic)?;

    let interface = MoveBaseInterface::new(
        config,
        action_client,
        message_store,
        knowledge_client,
        clear_costmaps_client,
    );

    if interface.config().wait_for_server {
        tokio::select! {
            _ = interface.wait_for_server() => {}
            _ = tokio::signal::ctrl_c() => return Ok(()),
        }
    }

    let dispatcher = ActionDispatcher::new(interface, dispatches, feedback);
    tokio::select! {
        result = dispatcher.run() => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }
    Ok(())
}
