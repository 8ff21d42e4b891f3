//! Process-wide configuration.
//!
//! Loaded once at startup from the environment (a `.env` file is honored via
//! `dotenvy`). Missing credentials abort startup instead of surfacing as a
//! failure on the first request.

use crate::types::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_base: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "8000".to_string())
                    .parse()
                    .map_err(|e| AppError::Config(format!("invalid PORT value: {}", e)))?,
            },
            llm: LlmConfig {
                api_key: required_var("OPENAI_API_KEY")?,
                api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: required_var("OPENAI_MODEL_NAME")?,
            },
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| AppError::Config(format!("environment variable {} is not set", name)))
}
