//! Anthropic Messages API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_TEMPERATURE;
use crate::error::BridgeError;

use super::http::{anthropic_headers, shared_client, status_to_error};
use super::{Completion, CompletionProvider};

const DEFAULT_BASE_URL: &str = "https://api.anthropic.com/v1";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 4096;

#[derive(Debug)]
pub struct AnthropicProvider {
    model: String,
    api_key: String,
    base_url: String,
    temperature: f64,
}

impl AnthropicProvider {
    pub fn new(
        model: String,
        api_key: String,
        base_url: Option<String>,
        temperature: Option<f64>,
    ) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            api_key,
            temperature: temperature.unwrap_or(DEFAULT_TEMPERATURE),
        }
    }

    fn build_request_body(&self, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": DEFAULT_MAX_TOKENS,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    fn provider_name(&self) -> &str {
        "anthropic"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, BridgeError> {
        let url = format!("{}/messages", self.base_url);

        debug!(model = %self.model, "Anthropic complete");

        let resp = shared_client()
            .post(&url)
            .headers(anthropic_headers(&self.api_key, API_VERSION))
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: MessagesResponse = resp.json().await?;

        let mut content = String::new();
        for block in &data.content {
            if block.kind == "text" {
                if let Some(ref text) = block.text {
                    content.push_str(text);
                }
            }
        }

        Ok(Completion { content })
    }
}

// Anthropic API response types (internal)

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}
