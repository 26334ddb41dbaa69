//! Runtime configuration, resolved once from the environment at startup.

use reqwest::Url;

use crate::error::{HeartbeatError, Result};

/// Environment variable naming the boskos host (optionally `host:port`).
pub const HOST_ENV: &str = "BOSKOS_HOST";
/// Environment variable naming the leased resource to keep busy.
pub const RESOURCE_NAME_ENV: &str = "BOSKOS_RESOURCE_NAME";
/// Host used when `BOSKOS_HOST` is unset.
pub const DEFAULT_HOST: &str = "boskos";
/// Owner reported to boskos on every heartbeat.
pub const OWNER: &str = "cluster-api-provider-gcp";

const UPDATE_PATH: &str = "update";

/// Resolved heartbeat configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Boskos host or `host:port`, optionally with an explicit scheme.
    pub host: String,
    /// Name of the resource being heartbeated.
    pub resource_name: String,
    /// Owner string sent with every update.
    pub owner: String,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Blank values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let host = non_blank(HOST_ENV).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let resource_name = non_blank(RESOURCE_NAME_ENV)
            .ok_or_else(|| HeartbeatError::Config(format!("{} is not set", RESOURCE_NAME_ENV)))?;

        Ok(Self {
            host,
            resource_name,
            owner: OWNER.to_string(),
        })
    }

    /// URL of the boskos update endpoint, without query parameters.
    pub fn update_url(&self) -> Result<Url> {
        let host = self.host.trim_end_matches('/');
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        };

        Url::parse(&format!("{}/{}", base, UPDATE_PATH))
            .map_err(|e| HeartbeatError::Config(format!("invalid boskos host {:?}: {}", self.host, e)))
    }
}
