//! Toolbridge — connect MCP tool servers to LLM providers.
//!
//! Discovers tools from a local Model Context Protocol process, offers them
//! to a configured LLM through a fixed instruction grammar, executes at most
//! one tool call per query, and folds the result into a text answer.
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn example() {
//! let answer = toolbridge::query::handle_query("What's the weather in New York?").await;
//! println!("{answer}");
//! # }
//! ```

pub mod config;
pub mod error;
pub mod interpret;
pub mod mcp;
pub mod prelude;
pub mod prompt;
pub mod provider;
pub mod query;
pub mod schema;
pub mod tools;

#[cfg(feature = "cli")]
pub mod cli;
