use chrono::{Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= API Request/Response Types =============

/// Input for a generation run. All four fields are required strings.
///
/// URLs are passed through unchecked; malformed values reach the writing
/// step as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GenerationRequest {
    pub topic: String,
    pub author_name: String,
    pub author_picture_url: String,
    pub cover_image_url: String,
}

impl GenerationRequest {
    /// Extract the required fields from a loosely-typed JSON body.
    ///
    /// A missing or non-string field is a client error, not a 500.
    pub fn from_value(body: &serde_json::Value) -> Result<Self> {
        Ok(Self {
            topic: required_field(body, "topic")?,
            author_name: required_field(body, "author_name")?,
            author_picture_url: required_field(body, "author_picture_url")?,
            cover_image_url: required_field(body, "cover_image_url")?,
        })
    }
}

fn required_field(body: &serde_json::Value, name: &str) -> Result<String> {
    body.get(name)
        .and_then(|value| value.as_str())
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidInput(format!("missing required field: {}", name)))
}

/// Successful response from `POST /run-agent`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerationResponse {
    /// The finalized document, frontmatter block followed by the body text.
    pub result: String,
}

/// Fixed payload returned by the health check.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

// ============= Pipeline Context Types =============

/// Wall-clock fields computed at request arrival, never client-supplied.
#[derive(Debug, Clone)]
pub struct DerivedContext {
    pub current_year: i32,
    /// ISO-8601 UTC timestamp with millisecond precision and a literal
    /// trailing `Z`, e.g. `2026-08-07T09:41:03.512Z`.
    pub current_date_iso: String,
}

impl DerivedContext {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            current_year: now.year(),
            current_date_iso: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// The merged input both pipeline stages read: caller-supplied metadata
/// seeds plus the derived wall-clock fields.
#[derive(Debug, Clone)]
pub struct GenerationContext {
    pub topic: String,
    pub author_name: String,
    pub author_picture_url: String,
    pub cover_image_url: String,
    pub current_year: i32,
    pub current_date_iso: String,
}

impl GenerationContext {
    pub fn new(request: GenerationRequest, derived: DerivedContext) -> Self {
        Self {
            topic: request.topic,
            author_name: request.author_name,
            author_picture_url: request.author_picture_url,
            cover_image_url: request.cover_image_url,
            current_year: derived.current_year,
            current_date_iso: derived.current_date_iso,
        }
    }
}

// ============= Error Types =============

/// Application error taxonomy.
///
/// Validation errors, collaborator failures, and internal errors map to
/// distinct status codes instead of one catch-all 500. The response body is
/// always `{"detail": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Llm(msg) => (axum::http::StatusCode::BAD_GATEWAY, msg),
            AppError::Config(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Internal(msg) => (axum::http::StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = serde_json::json!({
            "detail": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
