//! # Scribe — agentic blog-post generation server
//!
//! A small HTTP service that turns a topic and a handful of metadata seeds
//! into a publishable Markdown document with a frontmatter header, via a
//! two-stage LLM pipeline: a research step that collects current findings
//! about the topic, and a writing step that formats them into the final
//! document.
//!
//! ## Overview
//!
//! Scribe can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `scribe-server` binary
//! 2. **As a library** - Drive [`Pipeline`] directly from your own code
//!
//! ```rust,ignore
//! use scribe::{OpenAIClientFactory, Pipeline, LLMClientFactory};
//! use scribe::types::{DerivedContext, GenerationContext, GenerationRequest};
//!
//! # async fn run(request: GenerationRequest) -> scribe::Result<()> {
//! let factory = OpenAIClientFactory::new(api_key, api_base, model);
//! let ctx = GenerationContext::new(request, DerivedContext::now());
//! let document = Pipeline::new(factory.create().await?).run(&ctx).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`agents`] - Agent personas and task prompt templates
//! - [`api`] - REST API handlers and routes
//! - [`document`] - Output sanitization and frontmatter enforcement
//! - [`llm`] - LLM client abstraction and the OpenAI-compatible client
//! - [`pipeline`] - The ordered research-then-write pipeline
//! - [`types`] - Request/response types, contexts, error taxonomy
//! - [`utils`] - Environment-backed configuration

pub mod agents;
pub mod api;
pub mod document;
pub mod llm;
pub mod pipeline;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use document::GeneratedDocument;
pub use llm::{LLMClient, LLMClientFactory, OpenAIClient, OpenAIClientFactory};
pub use pipeline::{Pipeline, ResearchFindings};
pub use types::{AppError, Result};
pub use utils::config::Config;

use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Process-wide configuration, loaded once at startup and immutable
    pub config: Arc<Config>,
    /// LLM client factory; integration tests substitute a mock
    pub llm_factory: Arc<dyn LLMClientFactory>,
}
