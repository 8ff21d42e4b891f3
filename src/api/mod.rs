//! HTTP API layer, built on Axum.
//!
//! # Endpoints
//!
//! - `GET /` — health check, fixed status payload
//! - `POST /run-agent` — run the research-and-write pipeline for a topic
//! - `GET /api-docs/openapi.json` — generated OpenAPI document
//!
//! Success bodies are `{"result": ...}` / `{"message": ...}`; every error
//! body is `{"detail": "<message>"}` with a status from the taxonomy in
//! [`crate::types::AppError`].

/// Request handlers for each endpoint.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use crate::types::{GenerationRequest, GenerationResponse, HealthResponse};
use utoipa::OpenApi;

/// OpenAPI document for the service.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::health::health, handlers::generate::run_agent),
    components(schemas(GenerationRequest, GenerationResponse, HealthResponse)),
    tags(
        (name = "health", description = "Liveness probe"),
        (name = "generate", description = "Two-stage content generation")
    )
)]
pub struct ApiDoc;
