//! Ollama local provider (OpenAI-compatible).

use async_trait::async_trait;

use crate::error::BridgeError;

use super::openai::OpenAiProvider;
use super::{Completion, CompletionProvider};

#[derive(Debug)]
pub struct OllamaProvider {
    inner: OpenAiProvider,
}

impl OllamaProvider {
    pub fn new(model: String, base_url: String, temperature: Option<f64>) -> Self {
        let base = base_url.trim_end_matches('/');
        let base = base.strip_suffix("/v1").unwrap_or(base);
        Self {
            inner: OpenAiProvider::new(
                model,
                String::new(), // no API key for local
                Some(format!("{base}/v1")),
                temperature,
            ),
        }
    }
}

#[async_trait]
impl CompletionProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, BridgeError> {
        self.inner.complete(prompt).await
    }
}
