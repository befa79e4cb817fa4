// ABOUTME: Application wiring - builds the tool registry from Config and
// ABOUTME: runs the MCP server over stdio.

use crate::config::Config;
use crate::error::EnrollError;
use crate::mcp::McpServer;
use crate::registration::{RegisterUserTool, RegistrationClient};
use crate::tool::Registry;
use crate::tools::AddTool;

pub const SERVER_NAME: &str = "enroll";

/// Register every tool this server exposes.
pub async fn build_registry(config: &Config) -> Registry {
    let registry = Registry::new();
    registry.register(AddTool).await;
    registry
        .register(RegisterUserTool::new(
            RegistrationClient::new(config.registration.clone()),
            config.logo_placeholder.clone(),
        ))
        .await;
    registry
}

/// Serve all tools on stdin/stdout until the client hangs up.
pub async fn run_stdio(config: &Config) -> Result<(), EnrollError> {
    let registry = build_registry(config).await;
    tracing::info!(tools = ?registry.list().await, "serving MCP over stdio");

    McpServer::new(SERVER_NAME, env!("CARGO_PKG_VERSION"), registry)
        .serve_stdio()
        .await?;
    Ok(())
}
