pub mod client;
pub mod config;
pub mod error;
pub mod llm;
pub mod parser;
pub mod pipeline;

pub use client::{ApiReply, SearchApi, SearchClient};
pub use config::AgentConfig;
pub use error::{AgentError, AgentResult};
pub use llm::{Llm, OpenAi};
pub use parser::{LlmQueryParser, QueryParser};
pub use pipeline::{AgentOutcome, SearchPipeline};
