//! LLM completion providers.
//!
//! One trait, one factory. Provider selection is a closed dispatch over the
//! [`LlmConfig`] variants; there is no runtime provider registry.

pub mod http;

#[cfg(feature = "openai")]
pub mod openai;

#[cfg(feature = "anthropic")]
pub mod anthropic;

#[cfg(feature = "ollama")]
pub mod ollama;

use async_trait::async_trait;

use crate::config::LlmConfig;
use crate::error::BridgeError;

/// One completed model round trip.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
}

/// Core trait implemented by all completion providers.
#[async_trait]
pub trait CompletionProvider: std::fmt::Debug + Send + Sync {
    /// Provider name (e.g., "openai", "anthropic").
    fn provider_name(&self) -> &str;

    /// The model ID this provider instance serves.
    fn model_id(&self) -> &str;

    /// Request one completion for the given prompt text.
    async fn complete(&self, prompt: &str) -> Result<Completion, BridgeError>;
}

/// Create a provider for the given configuration.
#[allow(unused_variables)]
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn CompletionProvider>, BridgeError> {
    match config {
        #[cfg(feature = "openai")]
        LlmConfig::OpenAi(cfg) => {
            let api_key = cfg
                .api_key
                .clone()
                .or_else(|| std::env::var("OPENAI_API_KEY").ok())
                .ok_or_else(|| BridgeError::Authentication("Missing OPENAI_API_KEY".into()))?;
            Ok(Box::new(openai::OpenAiProvider::new(
                cfg.model_name.clone(),
                api_key,
                None,
                cfg.temperature,
            )))
        }
        #[cfg(feature = "anthropic")]
        LlmConfig::Anthropic(cfg) => {
            if cfg.api_key.is_empty() {
                return Err(BridgeError::Authentication(
                    "Missing ANTHROPIC_API_KEY".into(),
                ));
            }
            Ok(Box::new(anthropic::AnthropicProvider::new(
                cfg.model_name.clone(),
                cfg.api_key.clone(),
                None,
                cfg.temperature,
            )))
        }
        #[cfg(feature = "ollama")]
        LlmConfig::Ollama(cfg) => Ok(Box::new(ollama::OllamaProvider::new(
            cfg.model_name.clone(),
            cfg.base_url.clone(),
            cfg.temperature,
        ))),
        #[allow(unreachable_patterns)]
        other => Err(BridgeError::Configuration(format!(
            "Provider '{}' not enabled via feature flags",
            other.kind()
        ))),
    }
}
