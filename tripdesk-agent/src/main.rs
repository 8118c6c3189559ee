use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tripdesk_agent::{AgentConfig, AgentError, LlmQueryParser, OpenAi, SearchClient, SearchPipeline};

/// Parse a trip request in plain language and run it against the search API.
#[derive(Debug, Parser)]
#[command(name = "tripdesk-agent")]
struct Cli {
    /// The user input to parse
    #[arg(long = "user-input", short = 's')]
    user_input: String,

    /// Overrides `api_url` from config
    #[arg(long)]
    api_url: Option<String>,

    /// Overrides `model` from config
    #[arg(long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tripdesk_agent=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = AgentConfig::load()?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(model) = cli.model {
        config.model = model;
    }

    let api_key = config
        .openai_api_key
        .clone()
        .ok_or_else(|| AgentError::Config("OPENAI_API_KEY is not set".to_string()))?;

    let llm = Arc::new(OpenAi::new(api_key, config.model.clone()));
    let parser = Arc::new(LlmQueryParser::new(llm));
    let client = Arc::new(SearchClient::new(
        config.search_url(),
        Duration::from_secs(config.timeout_seconds),
    )?);
    let pipeline = SearchPipeline::new(parser, client);

    tracing::warn!("User input: {}", cli.user_input);
    let outcome = pipeline.run(&cli.user_input).await?;

    tracing::info!("Parsed query: {}", serde_json::to_string_pretty(&outcome.parsed_query)?);
    tracing::info!("API status: {}", outcome.api_status);
    if let Some(results) = &outcome.search_results {
        tracing::info!("Search results below:");
        for row in &results.results {
            tracing::info!("{}", serde_json::to_string_pretty(row)?);
        }
    }
    Ok(())
}
