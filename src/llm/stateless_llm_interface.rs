use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Failure while talking to the completion provider
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to model provider failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model provider did not answer within {0:?}")]
    Timeout(Duration),

    #[error("model provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("model provider returned an empty completion")]
    EmptyResponse,
}

/// Interface for a stateless language model
/// Stateless means the LLM keeps no memory between calls: every invocation
/// is a single-turn completion of one prompt.
#[async_trait]
pub trait StatelessLLMInterface: Send + Sync {
    /// Send the prompt as one user message and return the raw reply text
    async fn invoke(&self, prompt: &str) -> Result<String, LlmError>;
}
