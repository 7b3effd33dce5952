#![allow(dead_code)]

use rosplan_zenoh::Context;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_DOMAIN: AtomicU32 = AtomicU32::new(100);

/// A context whose session neither scouts nor listens, so tests only see
/// their own traffic.
pub fn isolated_context() -> Context {
    let mut config = zenoh::Config::default();
    config
        .insert_json5("scouting/multicast/enabled", "false")
        .unwrap();
    config.insert_json5("listen/endpoints", "[]").unwrap();
    config.insert_json5("connect/endpoints", "[]").unwrap();

    let domain_id = NEXT_DOMAIN.fetch_add(1, Ordering::Relaxed);
    Context::with_config(domain_id, config).expect("Failed to open session")
}
