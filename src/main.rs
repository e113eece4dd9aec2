// src/main.rs

use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use coachd::api::router::api_router;
use coachd::config::CONFIG;
use coachd::llm::OpenAIClient;
use coachd::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting coachd backend");
    info!("Model: {}", CONFIG.model);
    info!("OpenAI base: {}", CONFIG.openai_base_url);

    let provider = Arc::new(OpenAIClient::new());
    let app_state = Arc::new(AppState::new(provider));

    let app = api_router(app_state);

    let bind_address = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
