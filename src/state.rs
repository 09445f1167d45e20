use std::sync::Arc;

use crate::config::Config;
use crate::llm::{StatelessLLMFactory, StatelessLLMInterface};
use crate::translate::output_contract;
use crate::translate::prompt::PromptTemplate;

/// Read-only values shared by every request
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<dyn StatelessLLMInterface>,
    pub prompt: Arc<PromptTemplate>,
}

impl AppState {
    /// Resolve the credential and build the model client from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_key = config.api_key()?;
        let llm = StatelessLLMFactory::create_llm(&config.llm, api_key)?;
        Self::with_llm(config, llm)
    }

    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> anyhow::Result<Self> {
        let format_instructions = output_contract::describe();
        let prompt = PromptTemplate::translation(&format_instructions)?;

        Ok(Self {
            config: Arc::new(config),
            llm,
            prompt: Arc::new(prompt),
        })
    }
}
