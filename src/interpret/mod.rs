//! Parse model replies for tool-call directives and dispatch them.
//!
//! The reply grammar has two shapes: a direct answer, or a tool call carrying
//! `ACTION:` and `ACTION_INPUT:` lines. Extraction is anchored pattern
//! matching against the labels emitted by [`crate::prompt`].

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::BridgeError;
use crate::prompt::{ACTION_LABEL, THOUGHT_LABEL};
use crate::tools::ToolAdapter;

/// A tool-call directive extracted from a model reply.
///
/// Present at most once per reply, and only when both the tool-name token and
/// a JSON arguments block appear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub tool_name: String,
    /// Raw JSON text as written by the model; parsed at dispatch time.
    pub arguments_text: String,
}

fn action_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"ACTION: (\w+)").expect("action pattern is valid"))
}

fn action_input_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // (?s) lets the argument object span multiple lines.
    PATTERN.get_or_init(|| {
        Regex::new(r"(?s)ACTION_INPUT: (\{.*\})").expect("action input pattern is valid")
    })
}

/// Extract the directive when both grammar fields are present.
pub fn parse_directive(reply: &str) -> Option<Directive> {
    let tool_name = action_pattern().captures(reply)?.get(1)?.as_str().to_string();
    let arguments_text = action_input_pattern()
        .captures(reply)?
        .get(1)?
        .as_str()
        .to_string();

    Some(Directive {
        tool_name,
        arguments_text,
    })
}

/// The reasoning text between the first `THOUGHT:` and the first subsequent
/// `ACTION:` marker, trimmed. Empty when no `THOUGHT:` is present.
fn reasoning_context(reply: &str) -> &str {
    let Some((_, after_thought)) = reply.split_once(THOUGHT_LABEL) else {
        return "";
    };
    let context = after_thought
        .split_once(ACTION_LABEL)
        .map(|(head, _)| head)
        .unwrap_or(after_thought);
    context.trim()
}

/// Interpret a model reply, dispatching at most one tool call.
///
/// Replies without a complete directive, and directives naming an unknown
/// tool, pass through unchanged as the model's direct answer. Malformed
/// argument JSON is reported inline. A failing tool invocation is the one
/// error this function returns.
pub async fn interpret(reply: &str, adapters: &[ToolAdapter]) -> Result<String, BridgeError> {
    let Some(directive) = parse_directive(reply) else {
        return Ok(reply.to_string());
    };

    let arguments: serde_json::Value = match serde_json::from_str(&directive.arguments_text) {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "malformed ACTION_INPUT JSON");
            return Ok(format!(
                "I tried to use a tool but encountered an error: {e}"
            ));
        }
    };

    // First adapter with a matching name wins; lookup is case-sensitive.
    let Some(adapter) = adapters.iter().find(|a| a.name() == directive.tool_name) else {
        warn!(tool = %directive.tool_name, "model named an unregistered tool");
        return Ok(reply.to_string());
    };

    let tool_result = adapter.invoke(arguments).await?;

    Ok(format!(
        "I used the {} tool to answer your question.\n\n\
         Tool Result: {}\n\n\
         Based on this information: {}",
        directive.tool_name,
        tool_result,
        reasoning_context(reply),
    ))
}
