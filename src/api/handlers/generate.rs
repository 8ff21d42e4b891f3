use crate::{
    AppState,
    pipeline::Pipeline,
    types::{DerivedContext, GenerationContext, GenerationRequest, GenerationResponse, Result},
};
use axum::{Json, extract::State};

/// Run the research-and-write pipeline for a topic.
///
/// The body is taken as loose JSON so that a missing field surfaces as a
/// 400 naming the field instead of a framework rejection. The call blocks
/// until both generation steps complete; there is no partial result.
#[utoipa::path(
    post,
    path = "/run-agent",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated document", body = GenerationResponse),
        (status = 400, description = "Missing required field"),
        (status = 502, description = "Language-model failure")
    ),
    tag = "generate"
)]
pub async fn run_agent(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<GenerationResponse>> {
    let request = GenerationRequest::from_value(&body)?;
    let ctx = GenerationContext::new(request, DerivedContext::now());

    let llm = state.llm_factory.create().await?;
    let document = Pipeline::new(llm).run(&ctx).await?;

    Ok(Json(GenerationResponse {
        result: document.into_inner(),
    }))
}
