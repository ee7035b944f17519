//! Wrap discovered tools into uniform callable units.

use std::sync::Arc;

use tracing::debug;

use crate::error::BridgeError;
use crate::prompt::ToolSummary;
use crate::schema::{self, ParameterValidator};

use super::source::{ToolDescriptor, ToolSource};

/// A discovered remote tool, ready to invoke.
///
/// Owns no mutable state. Each [`ToolAdapter::invoke`] performs exactly one
/// remote call; results are never cached across calls.
pub struct ToolAdapter {
    name: String,
    description: String,
    validator: ParameterValidator,
    source: Arc<dyn ToolSource>,
}

impl ToolAdapter {
    /// Build an adapter from a discovered descriptor and the source that
    /// will execute its invocations.
    pub fn new(descriptor: ToolDescriptor, source: Arc<dyn ToolSource>) -> Self {
        let description = descriptor
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| format!("Tool: {}", descriptor.name));
        let validator = schema::translate(descriptor.input_schema.as_ref());

        Self {
            name: descriptor.name,
            description,
            validator,
            source,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn validator(&self) -> &ParameterValidator {
        &self.validator
    }

    /// Name and description as listed in the composed prompt.
    pub fn summary(&self) -> ToolSummary {
        ToolSummary {
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    /// Invoke the remote tool once and normalize the result to text.
    ///
    /// Structured results are serialized to a JSON string; plain string
    /// results pass through. Failures from the source propagate unchanged.
    pub async fn invoke(&self, arguments: serde_json::Value) -> Result<String, BridgeError> {
        debug!(tool = %self.name, "invoking remote tool");
        let result = self.source.call_tool(&self.name, arguments).await?;
        Ok(stringify_result(result))
    }
}

impl std::fmt::Debug for ToolAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolAdapter")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

fn stringify_result(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text,
        other => other.to_string(),
    }
}
