use scribe::{AppState, Config, OpenAIClientFactory, api};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Fail fast: missing credentials abort here, not on the first request.
    let config = Config::from_env()?;
    let llm_factory = Arc::new(OpenAIClientFactory::from_config(&config.llm));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState {
        config: Arc::new(config),
        llm_factory,
    };

    let app = api::routes::create_router().with_state(state);

    tracing::info!("Scribe API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
