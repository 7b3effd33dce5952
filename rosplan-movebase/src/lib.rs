//! ROSPlan action interface for move_base.
//!
//! Turns `goto_waypoint` actions dispatched by the planning system into
//! move_base goals:
//!
//! - [`config`] loads [`MoveBaseConfig`] from ROS-style arguments
//! - [`logger`] sets up tracing
//! - [`movebase`] holds [`MoveBaseInterface`], the handler itself
//! - [`dispatch`] runs an interface on the dispatch topic
//!
//! The handler only depends on the traits of [`rosplan_core::api`], the
//! `rosplan_interface_movebase` binary wires it to `rosplan-zenoh`.

pub mod config;
pub mod dispatch;
pub mod logger;
pub mod movebase;

pub use config::{ConfigError, MoveBaseConfig};
pub use dispatch::ActionDispatcher;
pub use movebase::{ActionInterface, DispatchError, MoveBaseInterface};
