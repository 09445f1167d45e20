use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use anyhow::Result;

use crate::config::LlmConfig;
use crate::llm::{OpenAICompatibleLLM, StatelessLLMInterface};

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - Provider name, model and endpoint settings
    /// * `api_key` - Credential resolved at startup
    pub fn create_llm(
        config: &LlmConfig,
        api_key: String,
    ) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.provider);

        let default_base_url = Self::default_base_url(&config.provider)
            .ok_or_else(|| anyhow::anyhow!("Unsupported LLM provider: {}", config.provider))?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        let llm = OpenAICompatibleLLM::new(
            config.model.clone(),
            base_url,
            api_key,
            config.temperature,
            Duration::from_secs(config.timeout_secs),
        )?;
        Ok(Arc::new(llm))
    }

    fn default_base_url(provider: &str) -> Option<&'static str> {
        match provider {
            "openai_llm" | "openai_compatible_llm" => Some("https://api.openai.com/v1"),
            "deepseek_llm" => Some("https://api.deepseek.com/v1"),
            "groq_llm" => Some("https://api.groq.com/openai/v1"),
            "mistral_llm" => Some("https://api.mistral.ai/v1"),
            _ => None,
        }
    }
}
