//! API request handlers.

/// Pipeline execution handler.
pub mod generate;
/// Health check handler.
pub mod health;
