use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tripdesk_core::{SearchRequest, SearchResponse};

use crate::error::{AgentError, AgentResult};

/// Result of one call to the search endpoint. Transport and decoding
/// failures are folded into `api_status` instead of being returned as errors.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub search_results: Option<SearchResponse>,
    pub api_status: String,
}

#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> ApiReply;
}

pub struct SearchClient {
    client: Client,
    search_url: String,
}

impl SearchClient {
    pub fn new(search_url: impl Into<String>, timeout: Duration) -> AgentResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgentError::Config(e.to_string()))?;
        Ok(Self {
            client,
            search_url: search_url.into(),
        })
    }

    async fn fetch(&self, request: &SearchRequest) -> reqwest::Result<SearchResponse> {
        self.client
            .get(&self.search_url)
            .query(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl SearchApi for SearchClient {
    async fn search(&self, request: &SearchRequest) -> ApiReply {
        tracing::info!("Sending query to {}: {:?}", self.search_url, request);
        match self.fetch(request).await {
            Ok(results) => {
                tracing::info!("Search returned {} results", results.results_count);
                ApiReply {
                    search_results: Some(results),
                    api_status: "success".to_string(),
                }
            }
            Err(e) => {
                tracing::error!("Error calling search API: {}", e);
                ApiReply {
                    search_results: None,
                    api_status: format!("error: {}", e),
                }
            }
        }
    }
}
