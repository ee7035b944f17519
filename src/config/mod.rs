//! LLM provider configuration.
//!
//! A closed union over the recognized provider variants, loadable from the
//! environment. Selecting and constructing the actual provider happens in
//! [`crate::provider::create_provider`].

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Default model when no configuration is supplied.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f64 = 0.0;

/// Recognized provider variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Ollama,
}

/// Configuration for one query's LLM provider.
///
/// Serialized form carries a `provider` tag, mirroring how the variants are
/// named on the command line and in `LLM_PROVIDER`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum LlmConfig {
    OpenAi(OpenAiConfig),
    Anthropic(AnthropicConfig),
    Ollama(OllamaConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    pub model_name: String,
    /// Falls back to `OPENAI_API_KEY` at provider construction when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    pub model_name: String,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaConfig {
    pub model_name: String,
    /// Ollama speaks the OpenAI-compatible API at this address.
    pub base_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl Default for LlmConfig {
    /// The out-of-the-box configuration: OpenAI GPT-4 at temperature 0.
    fn default() -> Self {
        Self::OpenAi(OpenAiConfig {
            model_name: DEFAULT_OPENAI_MODEL.to_string(),
            api_key: None,
            temperature: Some(DEFAULT_TEMPERATURE),
        })
    }
}

impl LlmConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `LLM_PROVIDER` (openai | anthropic | ollama), `LLM_MODEL`,
    /// `LLM_TEMPERATURE`, and the provider-specific credentials
    /// (`OPENAI_API_KEY`, `ANTHROPIC_API_KEY`, `OLLAMA_BASE_URL`).
    /// Unset or unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error

        let provider = std::env::var("LLM_PROVIDER")
            .ok()
            .and_then(|raw| raw.parse::<ProviderKind>().ok())
            .unwrap_or(ProviderKind::OpenAi);

        Self::from_env_for(provider)
    }

    /// Load environment-derived configuration for a specific provider.
    pub fn from_env_for(provider: ProviderKind) -> Self {
        let model = std::env::var("LLM_MODEL").ok();
        let temperature = std::env::var("LLM_TEMPERATURE")
            .ok()
            .and_then(|raw| raw.parse::<f64>().ok());

        match provider {
            ProviderKind::OpenAi => Self::OpenAi(OpenAiConfig {
                model_name: model.unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                temperature,
            }),
            ProviderKind::Anthropic => Self::Anthropic(AnthropicConfig {
                model_name: model.unwrap_or_else(|| DEFAULT_ANTHROPIC_MODEL.to_string()),
                api_key: std::env::var("ANTHROPIC_API_KEY").unwrap_or_default(),
                temperature,
            }),
            ProviderKind::Ollama => Self::Ollama(OllamaConfig {
                model_name: model.unwrap_or_else(|| DEFAULT_OLLAMA_MODEL.to_string()),
                base_url: std::env::var("OLLAMA_BASE_URL")
                    .unwrap_or_else(|_| DEFAULT_OLLAMA_BASE_URL.to_string()),
                temperature,
            }),
        }
    }

    /// The provider variant this configuration selects.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::OpenAi(_) => ProviderKind::OpenAi,
            Self::Anthropic(_) => ProviderKind::Anthropic,
            Self::Ollama(_) => ProviderKind::Ollama,
        }
    }

    /// The configured model name.
    pub fn model_name(&self) -> &str {
        match self {
            Self::OpenAi(c) => &c.model_name,
            Self::Anthropic(c) => &c.model_name,
            Self::Ollama(c) => &c.model_name,
        }
    }

    /// The configured temperature, defaulting to 0.
    pub fn temperature(&self) -> f64 {
        let configured = match self {
            Self::OpenAi(c) => c.temperature,
            Self::Anthropic(c) => c.temperature,
            Self::Ollama(c) => c.temperature,
        };
        configured.unwrap_or(DEFAULT_TEMPERATURE)
    }

    pub fn set_model_name(&mut self, model_name: String) {
        match self {
            Self::OpenAi(c) => c.model_name = model_name,
            Self::Anthropic(c) => c.model_name = model_name,
            Self::Ollama(c) => c.model_name = model_name,
        }
    }

    pub fn set_temperature(&mut self, temperature: f64) {
        match self {
            Self::OpenAi(c) => c.temperature = Some(temperature),
            Self::Anthropic(c) => c.temperature = Some(temperature),
            Self::Ollama(c) => c.temperature = Some(temperature),
        }
    }
}
