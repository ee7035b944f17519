//! CLI argument definitions.

use clap::Parser;

use crate::config::{LlmConfig, ProviderKind};
use crate::error::BridgeError;

/// Ask a question; the configured model may call MCP tools to answer it.
#[derive(Debug, Parser)]
#[command(name = "toolbridge", version, about = "Bridge MCP tools to an LLM")]
pub struct Cli {
    /// The query to answer.
    pub query: String,

    /// Provider to use (openai, anthropic, ollama). Defaults to LLM_PROVIDER
    /// or openai.
    #[arg(long)]
    pub provider: Option<String>,

    /// Model name override.
    #[arg(long)]
    pub model: Option<String>,

    /// Sampling temperature.
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Base URL for the ollama provider.
    #[arg(long)]
    pub base_url: Option<String>,
}

impl Cli {
    /// Build the provider configuration from flags over environment defaults.
    pub fn resolve_config(&self) -> Result<LlmConfig, BridgeError> {
        let mut config = match self.provider.as_deref() {
            None => LlmConfig::from_env(),
            Some(raw) => {
                let kind = raw.parse::<ProviderKind>().map_err(|_| {
                    BridgeError::Configuration(format!("Unsupported LLM provider: {raw}"))
                })?;
                LlmConfig::from_env_for(kind)
            }
        };

        if let Some(model) = &self.model {
            config.set_model_name(model.clone());
        }
        if let Some(temperature) = self.temperature {
            config.set_temperature(temperature);
        }
        if let Some(base_url) = &self.base_url {
            if let LlmConfig::Ollama(cfg) = &mut config {
                cfg.base_url = base_url.clone();
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_provider_flag() {
        let cli = Cli {
            query: "q".into(),
            provider: Some("mistral".into()),
            model: None,
            temperature: None,
            base_url: None,
        };

        let err = cli.resolve_config().expect_err("unknown provider should fail");
        assert!(matches!(err, BridgeError::Configuration(_)));
    }

    #[test]
    fn flag_overrides_apply_to_selected_provider() {
        let cli = Cli {
            query: "q".into(),
            provider: Some("ollama".into()),
            model: Some("llama3:70b".into()),
            temperature: Some(0.5),
            base_url: Some("http://10.0.0.2:11434".into()),
        };

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.kind(), ProviderKind::Ollama);
        assert_eq!(config.model_name(), "llama3:70b");
        assert_eq!(config.temperature(), 0.5);
        match config {
            LlmConfig::Ollama(cfg) => assert_eq!(cfg.base_url, "http://10.0.0.2:11434"),
            other => panic!("expected ollama config, got {other:?}"),
        }
    }
}
