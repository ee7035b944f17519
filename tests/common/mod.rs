//! Shared test doubles for the query pipeline.

use std::sync::Mutex;

use async_trait::async_trait;

use toolbridge::error::BridgeError;
use toolbridge::provider::{Completion, CompletionProvider};
use toolbridge::tools::{ToolDescriptor, ToolSource};

/// A tool source backed by fixed descriptors and queued call results.
pub struct MockToolSource {
    tools: Vec<ToolDescriptor>,
    calls: Mutex<Vec<(String, serde_json::Value)>>,
    results: Mutex<Vec<Result<serde_json::Value, BridgeError>>>,
    list_error: Mutex<Option<BridgeError>>,
}

impl MockToolSource {
    pub fn with_tools(tools: Vec<ToolDescriptor>) -> Self {
        Self {
            tools,
            calls: Mutex::new(Vec::new()),
            results: Mutex::new(Vec::new()),
            list_error: Mutex::new(None),
        }
    }

    pub fn failing_to_list(error: BridgeError) -> Self {
        let source = Self::with_tools(Vec::new());
        *source.list_error.lock().unwrap() = Some(error);
        source
    }

    /// Queue the result for the next tool call.
    pub fn queue_result(&self, result: Result<serde_json::Value, BridgeError>) {
        self.results.lock().unwrap().push(result);
    }

    pub fn calls(&self) -> Vec<(String, serde_json::Value)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ToolSource for MockToolSource {
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, BridgeError> {
        if let Some(error) = self.list_error.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.tools.clone())
    }

    async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, BridgeError> {
        self.calls
            .lock()
            .unwrap()
            .push((name.to_string(), arguments));
        self.results
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(serde_json::json!("unqueued mock result")))
    }
}

/// A provider that captures prompts and returns queued completions.
#[derive(Debug)]
pub struct CaptureProvider {
    responses: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
    fail_with: Mutex<Option<BridgeError>>,
}

impl CaptureProvider {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            fail_with: Mutex::new(None),
        }
    }

    pub fn failing(error: BridgeError) -> Self {
        let provider = Self::new();
        *provider.fail_with.lock().unwrap() = Some(error);
        provider
    }

    /// Queue a completion text for the next request.
    pub fn queue_response(&self, text: &str) {
        self.responses.lock().unwrap().push(text.to_string());
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl CompletionProvider for CaptureProvider {
    fn provider_name(&self) -> &str {
        "capture"
    }

    fn model_id(&self) -> &str {
        "capture-model"
    }

    async fn complete(&self, prompt: &str) -> Result<Completion, BridgeError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(error) = self.fail_with.lock().unwrap().take() {
            return Err(error);
        }
        let content = self
            .responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| "unqueued mock completion".to_string());
        Ok(Completion { content })
    }
}

/// Descriptor shorthand used across the pipeline tests.
pub fn descriptor(name: &str, description: &str) -> ToolDescriptor {
    ToolDescriptor {
        name: name.into(),
        description: Some(description.into()),
        input_schema: Some(serde_json::json!({
            "type": "object",
            "properties": { "q": { "type": "string" } },
            "required": ["q"],
        })),
    }
}
