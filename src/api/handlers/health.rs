use crate::types::HealthResponse;
use axum::Json;

/// Service liveness probe.
///
/// Idempotent and side-effect-free; always returns the same payload.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Scribe API is running".to_string(),
    })
}
