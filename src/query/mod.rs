//! Top-level query orchestration.
//!
//! One query runs connect → discover → compose → complete → interpret in
//! strict sequence. Nothing is retried; every failure is converted to a
//! user-facing answer string at the single catch boundary here.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::LlmConfig;
use crate::error::BridgeError;
use crate::interpret;
use crate::mcp::McpToolSource;
use crate::prompt;
use crate::provider::{self, CompletionProvider};
use crate::tools::{ToolAdapter, ToolSource};

/// Command used to spawn the tool-providing process.
pub const MCP_COMMAND: &str = "mcp";

/// Guidance returned when the MCP executable cannot be started.
pub const MCP_INSTALL_HINT: &str = "Error: The MCP CLI tool is not installed or not in your PATH. \
    Please install the Model Context Protocol CLI.\n\n\
    For more information, visit: https://modelcontextprotocol.io/";

/// Answer a query using environment-derived configuration.
pub async fn handle_query(user_query: &str) -> String {
    handle_query_with_config(user_query, &LlmConfig::from_env()).await
}

/// Answer a query with an explicit provider configuration.
pub async fn handle_query_with_config(user_query: &str, config: &LlmConfig) -> String {
    handle_query_with_command(user_query, config, MCP_COMMAND, &[]).await
}

/// Answer a query, spawning a specific tool-process command.
///
/// Never fails: any error from the pipeline is folded into the returned text.
pub async fn handle_query_with_command(
    user_query: &str,
    config: &LlmConfig,
    command: &str,
    args: &[String],
) -> String {
    let result = async {
        let source = McpToolSource::connect(command, args).await?;
        let provider = provider::create_provider(config)?;
        run_query(user_query, Arc::new(source), provider.as_ref()).await
    }
    .await;

    match result {
        Ok(answer) => answer,
        Err(e) => failure_answer(&e),
    }
}

/// The fallible pipeline: discover tools, compose the prompt, request one
/// completion, interpret it.
pub async fn run_query(
    user_query: &str,
    source: Arc<dyn ToolSource>,
    provider: &dyn CompletionProvider,
) -> Result<String, BridgeError> {
    let descriptors = source.list_tools().await?;
    debug!(count = descriptors.len(), "discovered tools");

    let adapters: Vec<ToolAdapter> = descriptors
        .into_iter()
        .map(|descriptor| ToolAdapter::new(descriptor, source.clone()))
        .collect();

    let summaries: Vec<_> = adapters.iter().map(ToolAdapter::summary).collect();
    let prompt_text = prompt::compose(&summaries, user_query);

    let completion = provider.complete(&prompt_text).await?;

    interpret::interpret(&completion.content, &adapters).await
}

/// Convert a pipeline failure into a user-facing answer string.
pub fn failure_answer(error: &BridgeError) -> String {
    if indicates_missing_mcp_binary(error) {
        warn!("MCP executable appears to be missing");
        return MCP_INSTALL_HINT.to_string();
    }
    format!("Error processing your query: {error}")
}

/// Substring checks (including a localized variant) for a connect failure
/// caused by a missing or unrecognized tool-process executable.
fn indicates_missing_mcp_binary(error: &BridgeError) -> bool {
    if let BridgeError::Io(io) = error {
        if io.kind() == std::io::ErrorKind::NotFound {
            return true;
        }
    }

    let message = error.to_string().to_lowercase();
    (message.contains("mcp") && message.contains("not recognized"))
        || message.contains("connection closed")
        || message.contains("n'est pas reconnu")
}
