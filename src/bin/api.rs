use std::sync::Arc;

use gemini_summarizer::ai::GeminiClient;
use gemini_summarizer::api::{AppState, router};
use gemini_summarizer::core::config::{AppConfig, MockSwitch};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    gemini_summarizer::setup_logging();

    let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;
    let addr = config.bind_addr();
    let max_body_bytes = config.max_body_bytes;

    let client = GeminiClient::new(config.gemini_api_key, config.gemini_api_base)?;
    let app = router(AppState::new(Arc::new(client), MockSwitch::Env), max_body_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("shutting down");
}
