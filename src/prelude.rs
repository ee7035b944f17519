//! Convenience re-exports for common use.

pub use crate::config::{LlmConfig, ProviderKind};
pub use crate::error::{BridgeError, Result};
pub use crate::provider::{Completion, CompletionProvider};
pub use crate::query::{handle_query, handle_query_with_config};
pub use crate::schema::{ParamKind, ParameterValidator};
pub use crate::tools::{ToolAdapter, ToolDescriptor, ToolSource};
