//! Mock LLM implementations for testing.
//!
//! The factory hands each pipeline run a client that replays a scripted
//! sequence of responses (research reply first, writer reply second), or
//! one that always fails, without making any API calls.

use async_trait::async_trait;
use scribe::types::{AppError, Result};
use scribe::{LLMClient, LLMClientFactory};
use std::sync::Mutex;

/// Mock client replaying scripted responses, one per generation call.
pub struct MockLLMClient {
    responses: Mutex<Vec<String>>,
    should_fail: bool,
}

impl MockLLMClient {
    pub fn scripted(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(vec![]),
            should_fail: true,
        }
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.generate_with_system("", prompt).await
    }

    async fn generate_with_system(&self, _system: &str, _prompt: &str) -> Result<String> {
        if self.should_fail {
            return Err(AppError::Llm("Mock LLM failure".to_string()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(AppError::Llm("mock response script exhausted".to_string()));
        }
        Ok(responses.remove(0))
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Mock factory producing a fresh scripted client per pipeline run.
pub struct MockLLMFactory {
    script: Vec<String>,
    should_fail: bool,
}

impl MockLLMFactory {
    pub fn scripted(script: Vec<String>) -> Self {
        Self {
            script,
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            script: vec![],
            should_fail: true,
        }
    }
}

#[async_trait]
impl LLMClientFactory for MockLLMFactory {
    async fn create(&self) -> Result<Box<dyn LLMClient>> {
        if self.should_fail {
            Ok(Box::new(MockLLMClient::failing()))
        } else {
            Ok(Box::new(MockLLMClient::scripted(self.script.clone())))
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
