//! Boskos update client.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use crate::config::Config;
use crate::error::{HeartbeatError, Result};

use super::request::HeartbeatRequest;

/// Anything that can deliver a heartbeat to the lease service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeaseClient: Send + Sync {
    /// Send one heartbeat. Anything but 200 OK is an error.
    async fn send_heartbeat(&self, request: &HeartbeatRequest) -> Result<()>;
}

/// HTTP client for the boskos `/update` endpoint.
pub struct BoskosClient {
    client: Client,
    url: Url,
}

impl BoskosClient {
    /// Create a client for the host in `config`.
    ///
    /// Idle connections are never pooled, so every heartbeat dials a fresh
    /// connection and closes it once the response is read.
    pub fn new(config: &Config) -> Result<Self> {
        let url = config.update_url()?;
        let client = Client::builder().pool_max_idle_per_host(0).build()?;
        Ok(Self { client, url })
    }

    /// Endpoint this client posts to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl LeaseClient for BoskosClient {
    async fn send_heartbeat(&self, request: &HeartbeatRequest) -> Result<()> {
        let response = self
            .client
            .post(self.url.clone())
            .query(request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(HeartbeatError::Protocol {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
                response: format!("{:?}", response),
            });
        }

        debug!(resource = %request.resource_name, "boskos accepted heartbeat");
        Ok(())
    }
}
