//! Heartbeat loop implementation.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::Result;

use super::client::LeaseClient;
use super::request::HeartbeatRequest;

/// Number of heartbeats sent before the run completes (three hours' worth).
pub const MAX_BEATS: u32 = 180;

/// Pause after each accepted heartbeat.
pub const BEAT_INTERVAL: Duration = Duration::from_secs(60);

/// Source of the pause between beats.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock sleeper backed by the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Outcome of a heartbeat run that reached its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatReport {
    pub beats_sent: u32,
}

/// Keeps one boskos resource marked busy for a bounded number of beats.
pub struct HeartbeatService<C, S> {
    config: Config,
    client: C,
    sleeper: S,
    max_beats: u32,
    interval: Duration,
}

impl<C: LeaseClient, S: Sleeper> HeartbeatService<C, S> {
    /// Create a service with the standard limits of 180 beats, one minute apart.
    pub fn new(config: Config, client: C, sleeper: S) -> Self {
        Self {
            config,
            client,
            sleeper,
            max_beats: MAX_BEATS,
            interval: BEAT_INTERVAL,
        }
    }

    /// Send heartbeats until the limit is reached or boskos rejects one.
    ///
    /// The first failure ends the run; nothing is retried.
    pub async fn run(&self) -> Result<HeartbeatReport> {
        info!(
            "Heartbeat started (resource={}, host={}, beats={}, interval={}s)",
            self.config.resource_name,
            self.config.host,
            self.max_beats,
            self.interval.as_secs()
        );

        let mut count = 0;
        while count < self.max_beats {
            let request = HeartbeatRequest::busy(&self.config);
            if let Err(e) = self.client.send_heartbeat(&request).await {
                error!(beat = count + 1, "Heartbeat aborted: {}", e);
                return Err(e);
            }
            count += 1;
            debug!(beat = count, "heartbeat sent");

            self.sleeper.sleep(self.interval).await;
        }

        info!("Heartbeat finished after {} beats", count);
        Ok(HeartbeatReport { beats_sent: count })
    }
}
