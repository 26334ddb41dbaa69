//! Boskos heartbeat - keeps a leased resource busy while a long job runs.

pub mod config;
pub mod error;
pub mod heartbeat;

pub use config::Config;
pub use error::{HeartbeatError, Result};
