// ABOUTME: Implements the Registry - a thread-safe container of the tools
// ABOUTME: the MCP server can list and call.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use super::Tool;
use crate::mcp::McpToolInfo;

/// A thread-safe registry of tools.
#[derive(Default)]
pub struct Registry {
    tools: Arc<RwLock<HashMap<String, Arc<dyn Tool>>>>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. A tool with the same name is replaced.
    pub async fn register<T: Tool + 'static>(&self, tool: T) {
        let name = tool.name().to_string();
        let mut tools = self.tools.write().await;
        if tools.insert(name.clone(), Arc::new(tool)).is_some() {
            tracing::debug!(tool = %name, "replaced registered tool");
        }
    }

    /// Get a tool by name.
    pub async fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        let tools = self.tools.read().await;
        tools.get(name).cloned()
    }

    /// List all tool names, sorted alphabetically.
    pub async fn list(&self) -> Vec<String> {
        let tools = self.tools.read().await;
        let mut names: Vec<_> = tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// Describe every tool for tools/list, sorted by name.
    pub async fn tool_infos(&self) -> Vec<McpToolInfo> {
        let tools = self.tools.read().await;
        let mut infos: Vec<_> = tools
            .values()
            .map(|t| McpToolInfo {
                name: t.name().to_string(),
                description: t.description().to_string(),
                input_schema: t.schema(),
            })
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            tools: Arc::clone(&self.tools),
        }
    }
}
