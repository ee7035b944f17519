//! Bridge an MCP client into the tool source seam.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::BridgeError;
use crate::tools::{ToolDescriptor, ToolSource};

use super::client::McpClient;

/// Exposes an [`McpClient`] through the [`ToolSource`] trait.
///
/// The client requires exclusive access per request; a single query's calls
/// are strictly sequential, so the mutex never contends in practice.
pub struct McpToolSource {
    client: Mutex<McpClient>,
}

impl McpToolSource {
    pub fn new(client: McpClient) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// Spawn the tool-providing process and wrap the connected client.
    pub async fn connect(command: &str, args: &[String]) -> Result<Self, BridgeError> {
        Ok(Self::new(McpClient::connect(command, args).await?))
    }
}

#[async_trait]
impl ToolSource for McpToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BridgeError> {
        let mut client = self.client.lock().await;
        client.list_tools().await
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, BridgeError> {
        let mut client = self.client.lock().await;
        let result = client.call_tool(name, arguments).await?;
        Ok(result.into_value_or_text())
    }
}
