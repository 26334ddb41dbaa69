//! Error types for the boskos heartbeat.
//!
//! Every failure is fatal to the run: the loop stops at the first error and
//! hands it back to the entry point, which decides the exit status.

use thiserror::Error;

/// The primary error type for heartbeat operations.
#[derive(Error, Debug)]
pub enum HeartbeatError {
    /// Configuration errors (missing resource name, unusable host, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Boskos answered with something other than 200 OK
    #[error("got invalid response while sending heartbeat: {status}: {reason}, {response}")]
    Protocol {
        status: u16,
        reason: String,
        response: String,
    },

    /// Transport errors (connection refused, DNS failure, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// A specialized `Result` type for heartbeat operations.
pub type Result<T> = std::result::Result<T, HeartbeatError>;
