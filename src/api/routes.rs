use crate::AppState;
use crate::api::ApiDoc;
use axum::{
    Json, Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub fn create_router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(crate::api::handlers::health::health))
        .route("/run-agent", post(crate::api::handlers::generate::run_agent))
        .route("/api-docs/openapi.json", get(openapi_spec))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn openapi_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
