use std::sync::Arc;

use async_trait::async_trait;
use tripdesk_core::SearchRequest;

use crate::error::{AgentError, AgentResult};
use crate::llm::Llm;

const EXTRACTION_PROMPT: &str = r#"Extract the following fields from the user message below.
If a field is not specified, leave it null. Output in JSON format only.

For the dates, convert any date-like instructions into a date in YYYY-MM-DD format.
If no year is specified, use the year 2024. Ignore any time-of-day instructions.

Expected output fields:
- country: The destination country
- start_date: Start date in YYYY-MM-DD format
- end_date: End date in YYYY-MM-DD format
- rate: Maximum daily rate, as a decimal currency value
- limit: Maximum number of results (default to 10)

Message: "#;

pub fn render_prompt(user_input: &str) -> String {
    format!("{}{}", EXTRACTION_PROMPT, user_input)
}

/// Turns free text into a structured search.
#[async_trait]
pub trait QueryParser: Send + Sync {
    async fn parse(&self, text: &str) -> AgentResult<SearchRequest>;
}

pub struct LlmQueryParser {
    llm: Arc<dyn Llm>,
}

impl LlmQueryParser {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QueryParser for LlmQueryParser {
    async fn parse(&self, text: &str) -> AgentResult<SearchRequest> {
        let reply = self
            .llm
            .complete(&render_prompt(text))
            .await
            .map_err(|e| AgentError::Parse(e.to_string()))?;
        tracing::debug!(provider = self.llm.name(), "Raw extraction: {}", reply);

        serde_json::from_str(strip_fences(&reply)).map_err(|e| AgentError::Parse(e.to_string()))
    }
}

/// Models like to wrap JSON in ```json fences.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().trim_end_matches("```").trim()
}
