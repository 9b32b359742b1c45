//! Router, dispatcher and model fallback joined into one call.

use health_agent_llm::{LlmClient, LlmResult, SYSTEM_PROMPT};

use crate::data::Tables;
use crate::router::Router;
use crate::tools::run_tool;

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// A query tool, by wire name
    Tool(&'static str),
    /// The language-model fallback
    Model,
}

/// Answer to one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub source: ReplySource,
    pub text: String,
}

/// Answers user input against a loaded table set.
///
/// Holds no conversation state; each call is independent.
pub struct Agent<'a, C: LlmClient + ?Sized> {
    tables: &'a Tables,
    router: Router,
    client: &'a C,
    model: String,
}

impl<'a, C: LlmClient + ?Sized> Agent<'a, C> {
    pub fn new(tables: &'a Tables, client: &'a C, model: &str) -> Self {
        Self {
            tables,
            router: Router::new(),
            client,
            model: model.to_string(),
        }
    }

    /// Route the input to a tool, or ask the model when no rule matches.
    ///
    /// Only the model path can fail.
    pub fn respond(&self, text: &str) -> LlmResult<Reply> {
        if let Some(tool) = self.router.route(text) {
            return Ok(Reply {
                source: ReplySource::Tool(tool.name()),
                text: run_tool(self.tables, &tool),
            });
        }

        tracing::info!(model = %self.model, "no tool matched, asking the model");
        let text = self.client.chat(&self.model, SYSTEM_PROMPT, text.trim())?;
        Ok(Reply {
            source: ReplySource::Model,
            text,
        })
    }
}
