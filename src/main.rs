use anyhow::Context;
use tracing_subscriber::EnvFilter;

use boskos_heartbeat::heartbeat::{BoskosClient, HeartbeatService, TokioSleeper};
use boskos_heartbeat::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; quiet unless RUST_LOG asks for more
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("failed to load heartbeat configuration")?;
    let client = BoskosClient::new(&config).context("failed to create boskos client")?;

    HeartbeatService::new(config, client, TokioSleeper)
        .run()
        .await
        .context("boskos heartbeat failed")?;

    Ok(())
}
