//! Compose the instruction prompt carrying the tool-use response grammar.
//!
//! The label text and field ordering here are a literal contract consumed by
//! [`crate::interpret`]; change both sides together.

/// Label opening the model's reasoning line.
pub const THOUGHT_LABEL: &str = "THOUGHT:";
/// Label naming the tool to invoke.
pub const ACTION_LABEL: &str = "ACTION:";
/// Label carrying the JSON argument object.
pub const ACTION_INPUT_LABEL: &str = "ACTION_INPUT:";

/// Name and description of one tool, as listed in the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
}

/// Render the instruction prompt for one query.
///
/// Tools are listed one per line in discovery order, followed by the literal
/// user query and the fixed response-grammar explanation.
pub fn compose(tools: &[ToolSummary], query: &str) -> String {
    let tool_lines = tools
        .iter()
        .map(|t| format!("{}: {}", t.name, t.description))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You have access to the following tools:\n\
         {tool_lines}\n\
         \n\
         User Query: {query}\n\
         \n\
         To use a tool, please respond in the following format:\n\
         THOUGHT: Your reasoning about what tool to use\n\
         ACTION: tool_name\n\
         ACTION_INPUT: {{\"param1\": \"value1\", \"param2\": \"value2\"}}\n\
         \n\
         If no tool is needed to answer the query, just provide your response directly.\n\
         \n\
         Begin now:"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, description: &str) -> ToolSummary {
        ToolSummary {
            name: name.into(),
            description: description.into(),
        }
    }

    #[test]
    fn lists_tools_in_discovery_order() {
        let prompt = compose(
            &[
                summary("zeta", "last discovered"),
                summary("alpha", "first alphabetically"),
            ],
            "anything",
        );

        let zeta = prompt.find("zeta: last discovered").unwrap();
        let alpha = prompt.find("alpha: first alphabetically").unwrap();
        assert!(zeta < alpha, "discovery order must win over name order");
    }

    #[test]
    fn embeds_the_literal_query() {
        let prompt = compose(&[], "What's the weather in New York?");
        assert!(prompt.contains("User Query: What's the weather in New York?"));
    }

    #[test]
    fn explains_the_response_grammar_with_exact_labels() {
        let prompt = compose(&[summary("search", "query index")], "q");

        assert!(prompt.contains("THOUGHT: Your reasoning about what tool to use"));
        assert!(prompt.contains("ACTION: tool_name"));
        assert!(prompt.contains(r#"ACTION_INPUT: {"param1": "value1", "param2": "value2"}"#));
        assert!(prompt.contains("just provide your response directly"));
    }

    #[test]
    fn grammar_labels_match_the_shared_constants() {
        let prompt = compose(&[], "q");

        assert!(prompt.contains(THOUGHT_LABEL));
        assert!(prompt.contains(ACTION_LABEL));
        assert!(prompt.contains(ACTION_INPUT_LABEL));
    }
}
