use crate::types::Result;
use crate::utils::config::LlmConfig;
use async_trait::async_trait;

/// Generic LLM client trait for provider abstraction.
///
/// Both pipeline stages issue exactly one completion each through this
/// trait, so swapping the provider never touches application code.
#[async_trait]
pub trait LLMClient: Send + Sync {
    /// Generate a completion from a prompt
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Generate with system prompt
    async fn generate_with_system(&self, system: &str, prompt: &str) -> Result<String>;

    /// Get the model name/identifier
    fn model_name(&self) -> &str;
}

/// Factory for creating LLM clients.
///
/// Held by the application state as a trait object; tests substitute a mock
/// factory to run the full pipeline without a network.
#[async_trait]
pub trait LLMClientFactory: Send + Sync {
    /// Create a client for one pipeline run
    async fn create(&self) -> Result<Box<dyn LLMClient>>;

    /// The model identifier clients will be created with
    fn model_name(&self) -> &str;
}

/// Production factory backed by the OpenAI-compatible API.
pub struct OpenAIClientFactory {
    api_key: String,
    api_base: String,
    model: String,
}

impl OpenAIClientFactory {
    pub fn new(api_key: String, api_base: String, model: String) -> Self {
        Self {
            api_key,
            api_base,
            model,
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(
            config.api_key.clone(),
            config.api_base.clone(),
            config.model.clone(),
        )
    }
}

#[async_trait]
impl LLMClientFactory for OpenAIClientFactory {
    async fn create(&self) -> Result<Box<dyn LLMClient>> {
        Ok(Box::new(super::openai::OpenAIClient::new(
            self.api_key.clone(),
            self.api_base.clone(),
            self.model.clone(),
        )))
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_from_config() {
        let config = LlmConfig {
            api_key: "sk-test".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        };

        let factory = OpenAIClientFactory::from_config(&config);
        assert_eq!(factory.model_name(), "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_factory_creates_client_with_model() {
        let factory = OpenAIClientFactory::new(
            "sk-test".to_string(),
            "https://api.openai.com/v1".to_string(),
            "gpt-4o-mini".to_string(),
        );

        let client = factory.create().await.unwrap();
        assert_eq!(client.model_name(), "gpt-4o-mini");
    }
}
