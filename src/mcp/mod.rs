// ABOUTME: MCP module - Model Context Protocol server implementation.
// ABOUTME: Mounts the tool Registry behind JSON-RPC over stdio.

mod server;
mod types;

pub use server::McpServer;
pub use types::*;
