//! The query payload of a single heartbeat.

use serde::Serialize;

use crate::config::Config;

/// Lease state asserted on every heartbeat.
pub const BUSY_STATE: &str = "busy";

/// One `/update` call's parameters. Built fresh for every beat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeartbeatRequest {
    #[serde(rename = "name")]
    pub resource_name: String,
    pub state: String,
    pub owner: String,
}

impl HeartbeatRequest {
    /// Request marking the configured resource busy under the configured owner.
    pub fn busy(config: &Config) -> Self {
        Self {
            resource_name: config.resource_name.clone(),
            state: BUSY_STATE.to_string(),
            owner: config.owner.clone(),
        }
    }
}
