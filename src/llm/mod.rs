//! LLM client abstraction.
//!
//! The rest of the application talks to the language-model collaborator
//! through the [`LLMClient`] trait; [`LLMClientFactory`] is the seam the
//! application state holds so integration tests can inject mock clients.
//! The production implementation targets any OpenAI-compatible
//! chat-completion endpoint.

/// Core LLM client and factory traits.
pub mod client;
/// OpenAI-compatible chat-completion client.
pub mod openai;

pub use client::{LLMClient, LLMClientFactory, OpenAIClientFactory};
pub use openai::OpenAIClient;
