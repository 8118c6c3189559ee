use serde::Deserialize;

use crate::error::{AgentError, AgentResult};

#[derive(Debug, Deserialize, Clone)]
pub struct AgentConfig {
    /// Base URL of the tripdesk API, without the `/api/trip` prefix.
    pub api_url: String,
    pub model: String,
    pub timeout_seconds: u64,
    #[serde(skip)]
    pub openai_api_key: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:9009".to_string(),
            model: "gpt-4".to_string(),
            timeout_seconds: 10,
            openai_api_key: None,
        }
    }
}

impl AgentConfig {
    pub fn load() -> AgentResult<Self> {
        let defaults = AgentConfig::default();

        let s = config::Config::builder()
            .set_default("api_url", defaults.api_url)
            .and_then(|b| b.set_default("model", defaults.model))
            .and_then(|b| b.set_default("timeout_seconds", defaults.timeout_seconds as i64))
            .map_err(|e| AgentError::Config(e.to_string()))?
            .add_source(config::File::with_name("config/agent").required(false))
            // Eg.. `TRIPDESK_AGENT_MODEL=gpt-4o`
            .add_source(
                config::Environment::with_prefix("TRIPDESK_AGENT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(|e| AgentError::Config(e.to_string()))?;

        let mut config: AgentConfig = s
            .try_deserialize()
            .map_err(|e| AgentError::Config(e.to_string()))?;
        config.openai_api_key = std::env::var("OPENAI_API_KEY").ok();
        Ok(config)
    }

    pub fn search_url(&self) -> String {
        format!("{}/api/trip/openings/search", self.api_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_url_joins_prefix() {
        let mut config = AgentConfig::default();
        assert_eq!(config.search_url(), "http://localhost:9009/api/trip/openings/search");

        config.api_url = "http://trips.internal:8080/".to_string();
        assert_eq!(config.search_url(), "http://trips.internal:8080/api/trip/openings/search");
    }

    #[test]
    fn test_load_defaults() {
        let config = AgentConfig::load().unwrap();
        assert_eq!(config.timeout_seconds, 10);
    }
}
