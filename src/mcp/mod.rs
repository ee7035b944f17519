//! MCP connectivity: child-process client and the tool source bridge.

pub mod bridge;
pub mod client;

pub use bridge::McpToolSource;
pub use client::{McpClient, McpToolCallResult};
