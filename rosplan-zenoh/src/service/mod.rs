//! Service clients and servers.

pub mod client;
pub mod server;

pub use server::ServiceRequest;
