//! Runtime tool discovery and invocation seam.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::BridgeError;

/// A tool advertised by the tool-providing process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Option<serde_json::Value>,
}

/// Trait for transports that can discover and execute tools at runtime.
///
/// The MCP client implements this; tests substitute mocks.
#[async_trait]
pub trait ToolSource: Send + Sync {
    /// List the tools currently available, in server order.
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BridgeError>;

    /// Execute a tool by name with a JSON argument object.
    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, BridgeError>;
}
