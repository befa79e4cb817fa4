// ABOUTME: enroll-server - serves the register_user and add tools over MCP
// ABOUTME: stdio. Configuration comes from the environment or a .env file.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use enroll::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_tracing(&config);

    run_stdio(&config).await?;
    tracing::info!("enroll-server stopped");
    Ok(())
}

/// Log to stderr; stdout carries the JSON-RPC stream.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
    }
}
