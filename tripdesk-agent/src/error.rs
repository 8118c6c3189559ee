#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// The model's reply could not be turned into a search request.
    #[error("could not parse: {0}")]
    Parse(String),

    #[error("llm request failed: {0}")]
    Llm(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type AgentResult<T> = Result<T, AgentError>;
