//! Topic publishers and subscribers.

pub mod publisher;
pub mod subscriber;
