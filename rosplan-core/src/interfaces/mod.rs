//! Message, service and action definitions.
//!
//! Types are grouped by the package that defines them, mirroring the ROS
//! naming (`geometry_msgs::msg::PoseStamped`, `std_srvs::srv::Empty`, ...).

#![allow(non_camel_case_types)]

pub mod actionlib_msgs;
pub mod diagnostic_msgs;
pub mod geometry_msgs;
pub mod message_store_msgs;
pub mod move_base_msgs;
pub mod rosplan_dispatch_msgs;
pub mod rosplan_knowledge_msgs;
pub mod std_msgs;
pub mod std_srvs;
