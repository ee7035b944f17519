//! OpenAI Chat Completions API provider.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::DEFAULT_TEMPERATURE;
use crate::error::BridgeError;

use super::http::{bearer_headers, shared_client, status_to_error};
use super::{Completion, CompletionProvider};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug)]
pub struct OpenAiProvider {
    model: String,
    api_key: String,
    base_url: String,
    temperature: f64,
}

impl OpenAiProvider {
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
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
        })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, BridgeError> {
        let url = format!("{}/chat/completions", self.base_url);

        debug!(model = %self.model, "OpenAI complete");

        let resp = shared_client()
            .post(&url)
            .headers(bearer_headers(&self.api_key))
            .json(&self.build_request_body(prompt))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let data: ChatResponse = resp.json().await?;
        let choice = data
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| BridgeError::api(200, "No choices in OpenAI response"))?;

        Ok(Completion {
            content: choice.message.content.unwrap_or_default(),
        })
    }
}

// OpenAI API response types (internal)

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}
