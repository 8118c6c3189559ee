use std::sync::Arc;

use serde::Serialize;
use tripdesk_core::{SearchRequest, SearchResponse};

use crate::client::SearchApi;
use crate::error::AgentResult;
use crate::parser::QueryParser;

#[derive(Debug, Clone, Serialize)]
pub struct AgentOutcome {
    pub parsed_query: SearchRequest,
    pub search_results: Option<SearchResponse>,
    pub api_status: String,
}

/// Parse → search. A parse failure stops the run; a search failure only
/// shows up in `api_status`.
pub struct SearchPipeline {
    parser: Arc<dyn QueryParser>,
    api: Arc<dyn SearchApi>,
}

impl SearchPipeline {
    pub fn new(parser: Arc<dyn QueryParser>, api: Arc<dyn SearchApi>) -> Self {
        Self { parser, api }
    }

    pub async fn run(&self, user_input: &str) -> AgentResult<AgentOutcome> {
        let parsed_query = self.parser.parse(user_input).await?;
        tracing::info!("Parsed query: {:?}", parsed_query);

        let reply = self.api.search(&parsed_query).await;
        Ok(AgentOutcome {
            parsed_query,
            search_results: reply.search_results,
            api_status: reply.api_status,
        })
    }
}
