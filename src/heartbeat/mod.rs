//! Heartbeat loop - keeps a boskos resource marked busy for a fixed run.

mod client;
mod request;
mod service;

pub use client::{BoskosClient, LeaseClient};
pub use request::{HeartbeatRequest, BUSY_STATE};
pub use service::{
    HeartbeatReport, HeartbeatService, Sleeper, TokioSleeper, BEAT_INTERVAL, MAX_BEATS,
};
