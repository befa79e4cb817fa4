// ABOUTME: MCP server - dispatches JSON-RPC requests to the tool Registry
// ABOUTME: and speaks newline-delimited JSON over any async reader/writer.

use serde_json::{Value, json};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::Instrument;

use super::{
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, JSONRPC_VERSION, METHOD_NOT_FOUND,
    McpImplementationInfo, McpInitializeResult, McpRequest, McpResponse, McpRpcError,
    McpServerCapabilities, McpToolCallParams, McpToolResult, McpToolsListResult, PARSE_ERROR,
    PROTOCOL_VERSION,
};
use crate::error::McpError;
use crate::tool::{Registry, ToolResult};

/// Serves the tools in a Registry to a single MCP client.
#[derive(Clone)]
pub struct McpServer {
    info: McpImplementationInfo,
    registry: Registry,
}

impl McpServer {
    pub fn new(name: impl Into<String>, version: impl Into<String>, registry: Registry) -> Self {
        Self {
            info: McpImplementationInfo {
                name: name.into(),
                version: version.into(),
            },
            registry,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Serve over the process's stdin and stdout.
    pub async fn serve_stdio(&self) -> Result<(), McpError> {
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Read requests line by line until EOF. Each request is handled on its
    /// own task; responses are written as they complete.
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<McpResponse>(64);

        let writer_task = tokio::spawn(async move {
            let mut writer = writer;
            while let Some(response) = rx.recv().await {
                let json = serde_json::to_string(&response)?;
                writer.write_all(json.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;
            }
            Ok::<_, McpError>(())
        });

        let read = self.read_requests(reader, &tx).await;

        // In-flight handlers keep their own senders, so the writer drains them.
        drop(tx);
        let written = writer_task
            .await
            .map_err(|e| McpError::Protocol(format!("writer task failed: {}", e)))?;
        read?;
        written
    }

    async fn read_requests<R>(
        &self,
        mut reader: R,
        tx: &mpsc::Sender<McpResponse>,
    ) -> Result<(), McpError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                tracing::info!("client closed input");
                return Ok(());
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim().to_string(),
                Err(e) => {
                    tracing::warn!(error = %e, "request is not valid UTF-8");
                    let response = McpResponse::failure(
                        Value::Null,
                        McpRpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                    );
                    let _ = tx.send(response).await;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            let server = self.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&line).await {
                    let _ = tx.send(response).await;
                }
            });
        }
    }

    /// Handle one raw line of input.
    pub async fn handle_line(&self, line: &str) -> Option<McpResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request");
                return Some(McpResponse::failure(
                    Value::Null,
                    McpRpcError::new(PARSE_ERROR, format!("Parse error: {}", e)),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        match serde_json::from_value::<McpRequest>(value) {
            Ok(request) => self.handle(request).await,
            Err(e) => Some(McpResponse::failure(
                id,
                McpRpcError::new(INVALID_REQUEST, format!("Invalid request: {}", e)),
            )),
        }
    }

    /// Dispatch a request. Notifications produce no response.
    pub async fn handle(&self, request: McpRequest) -> Option<McpResponse> {
        let Some(id) = request.id.clone() else {
            tracing::debug!(method = %request.method, "notification");
            return None;
        };

        if request.jsonrpc != JSONRPC_VERSION {
            return Some(McpResponse::failure(
                id,
                McpRpcError::new(INVALID_REQUEST, "jsonrpc must be \"2.0\""),
            ));
        }

        let outcome = match request.method.as_str() {
            "initialize" => Ok(self.initialize()),
            "ping" => Ok(json!({})),
            "tools/list" => self.list_tools().await,
            "tools/call" => self.call_tool(request.params).await,
            other => Err(McpRpcError::new(
                METHOD_NOT_FOUND,
                format!("Method not found: {}", other),
            )),
        };

        Some(match outcome {
            Ok(result) => McpResponse::success(id, result),
            Err(error) => McpResponse::failure(id, error),
        })
    }

    fn initialize(&self) -> Value {
        let result = McpInitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: McpServerCapabilities {
                tools: Some(json!({})),
            },
            server_info: self.info.clone(),
        };
        serde_json::to_value(result).unwrap_or(Value::Null)
    }

    async fn list_tools(&self) -> Result<Value, McpRpcError> {
        let result = McpToolsListResult {
            tools: self.registry.tool_infos().await,
        };
        serde_json::to_value(result)
            .map_err(|e| McpRpcError::new(INTERNAL_ERROR, e.to_string()))
    }

    async fn call_tool(&self, params: Option<Value>) -> Result<Value, McpRpcError> {
        let params: McpToolCallParams = params
            .ok_or_else(|| McpRpcError::new(INVALID_PARAMS, "Missing tools/call params"))
            .and_then(|p| {
                serde_json::from_value(p).map_err(|e| {
                    McpRpcError::new(INVALID_PARAMS, format!("Invalid tools/call params: {}", e))
                })
            })?;

        let tool = self.registry.get(&params.name).await.ok_or_else(|| {
            McpRpcError::new(INVALID_PARAMS, format!("Unknown tool: {}", params.name))
        })?;

        let arguments = params.arguments.unwrap_or(Value::Null);
        let span = tracing::info_span!(
            "tools_call",
            tool = %params.name,
            invocation = %uuid::Uuid::new_v4()
        );
        let result = async {
            match tool.execute(arguments).await {
                Ok(result) => result,
                Err(e) => {
                    tracing::warn!(error = %e, "tool execution failed");
                    ToolResult::error(format!("Tool execution failed: {}", e))
                }
            }
        }
        .instrument(span)
        .await;

        serde_json::to_value(McpToolResult::from(result))
            .map_err(|e| McpRpcError::new(INTERNAL_ERROR, e.to_string()))
    }
}
