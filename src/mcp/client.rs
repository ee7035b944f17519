//! MCP client over the rmcp child-process transport.

use rmcp::{
    model::{CallToolRequestParams, CallToolResult, ClientInfo, Content, JsonObject, ResourceContents},
    service::{ClientInitializeError, DynService, RoleClient, RunningService, ServiceError, ServiceExt},
    transport::TokioChildProcess,
};
use tokio::process::Command;
use tracing::debug;

use crate::error::BridgeError;
use crate::tools::ToolDescriptor;

type DynClientService = Box<dyn DynService<RoleClient>>;
pub type McpRunningService = RunningService<RoleClient, DynClientService>;

/// Normalized result of one MCP tool call.
#[derive(Debug, Clone)]
pub struct McpToolCallResult {
    pub structured_content: Option<serde_json::Value>,
    pub text_content: Option<String>,
    pub content: Vec<serde_json::Value>,
}

impl McpToolCallResult {
    /// Prefer structured content, then joined text, then the raw content list.
    pub fn into_value_or_text(self) -> serde_json::Value {
        if let Some(structured) = self.structured_content {
            return structured;
        }
        if let Some(text) = self.text_content {
            return serde_json::Value::String(text);
        }
        serde_json::Value::Array(self.content)
    }
}

/// Client for a Model Context Protocol server reached over stdio.
pub struct McpClient {
    session: McpRunningService,
}

impl McpClient {
    /// Spawn the tool-providing process and complete the MCP handshake.
    pub async fn connect(command: &str, args: &[String]) -> Result<Self, BridgeError> {
        debug!(command, "spawning MCP server process");

        let mut cmd = Command::new(command);
        cmd.args(args);
        let transport = TokioChildProcess::new(cmd)?;

        let session = ClientInfo::default()
            .into_dyn()
            .serve(transport)
            .await
            .map_err(map_client_initialize_error)?;

        Ok(Self { session })
    }

    /// Wrap an already-running rmcp session.
    ///
    /// Initialization handshake is already handled by rmcp `serve(...)`.
    pub fn from_running_service(session: McpRunningService) -> Self {
        Self { session }
    }

    /// List available tools from the MCP server, in server order.
    pub async fn list_tools(&mut self) -> Result<Vec<ToolDescriptor>, BridgeError> {
        let tools = match self.session.list_all_tools().await {
            Ok(tools) => tools,
            Err(ServiceError::UnexpectedResponse) => {
                let page = self
                    .session
                    .list_tools(None)
                    .await
                    .map_err(|e| map_service_error("list_tools", e))?;
                page.tools
            }
            Err(e) => return Err(map_service_error("list_tools", e)),
        };

        Ok(tools.into_iter().map(map_tool_descriptor).collect())
    }

    /// Execute a tool on the MCP server.
    pub async fn call_tool(
        &mut self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<McpToolCallResult, BridgeError> {
        let arguments = coerce_tool_arguments(arguments)?;

        let result = self
            .session
            .call_tool(CallToolRequestParams {
                meta: None,
                name: name.to_owned().into(),
                arguments,
                task: None,
            })
            .await
            .map_err(|e| map_service_error("call_tool", e))?;

        map_call_result(name, result)
    }
}

fn map_tool_descriptor(tool: rmcp::model::Tool) -> ToolDescriptor {
    ToolDescriptor {
        name: tool.name.to_string(),
        description: tool.description.map(|d| d.to_string()),
        input_schema: Some(serde_json::Value::Object((*tool.input_schema).clone())),
    }
}

fn coerce_tool_arguments(value: serde_json::Value) -> Result<Option<JsonObject>, BridgeError> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Object(map) => Ok(Some(map)),
        serde_json::Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            let parsed: serde_json::Value = serde_json::from_str(trimmed).map_err(|e| {
                BridgeError::InvalidArgument(format!("MCP tool arguments must be valid JSON: {e}"))
            })?;
            coerce_tool_arguments(parsed)
        }
        other => Err(BridgeError::InvalidArgument(format!(
            "MCP tool arguments must be a JSON object; got {other}"
        ))),
    }
}

fn extract_text_content(content: &[Content]) -> Option<String> {
    let mut lines = Vec::new();
    for item in content {
        if let Some(text) = item.as_text() {
            lines.push(text.text.clone());
            continue;
        }
        if let Some(resource) = item.as_resource() {
            if let ResourceContents::TextResourceContents { text, .. } = &resource.resource {
                lines.push(text.clone());
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

fn map_call_result(name: &str, result: CallToolResult) -> Result<McpToolCallResult, BridgeError> {
    let text_content = extract_text_content(&result.content);
    let content = result
        .content
        .iter()
        .filter_map(|item| serde_json::to_value(item).ok())
        .collect::<Vec<_>>();

    if result.is_error.unwrap_or(false) {
        let message = result
            .structured_content
            .as_ref()
            .map(|v| v.to_string())
            .or_else(|| text_content.clone())
            .unwrap_or_else(|| "MCP tool returned an error result".into());

        return Err(BridgeError::ToolExecution {
            tool_name: name.to_string(),
            message,
        });
    }

    Ok(McpToolCallResult {
        structured_content: result.structured_content,
        text_content,
        content,
    })
}

fn map_client_initialize_error(error: ClientInitializeError) -> BridgeError {
    match error {
        ClientInitializeError::ConnectionClosed(context) => {
            BridgeError::Transport(format!("MCP initialize connection closed: {context}"))
        }
        ClientInitializeError::TransportError { error, context } => BridgeError::Transport(
            format!("MCP initialize transport error ({context}): {error}"),
        ),
        ClientInitializeError::JsonRpcError(error) => BridgeError::Provider {
            provider: "mcp".into(),
            message: format!(
                "MCP initialize JSON-RPC error {}: {}",
                error.code.0, error.message
            ),
        },
        ClientInitializeError::Cancelled => {
            BridgeError::Transport("MCP initialize cancelled".into())
        }
        other => BridgeError::Provider {
            provider: "mcp".into(),
            message: format!("MCP initialize error: {other}"),
        },
    }
}

fn map_service_error(context: &str, error: ServiceError) -> BridgeError {
    match error {
        ServiceError::McpError(error) => BridgeError::Provider {
            provider: "mcp".into(),
            message: format!("{context}: MCP error {}: {}", error.code.0, error.message),
        },
        ServiceError::TransportSend(error) => {
            BridgeError::Transport(format!("{context}: MCP transport send failed: {error}"))
        }
        ServiceError::TransportClosed => {
            BridgeError::Transport(format!("{context}: MCP transport closed"))
        }
        ServiceError::UnexpectedResponse => BridgeError::Provider {
            provider: "mcp".into(),
            message: format!("{context}: unexpected MCP response"),
        },
        ServiceError::Cancelled { reason } => {
            let suffix = reason
                .as_deref()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default();
            BridgeError::Transport(format!("{context}: MCP request cancelled{suffix}"))
        }
        ServiceError::Timeout { timeout } => BridgeError::Timeout(timeout.as_millis() as u64),
        other => BridgeError::Provider {
            provider: "mcp".into(),
            message: format!("{context}: MCP service error: {other}"),
        },
    }
}
