use std::sync::Arc;

use anyhow::Context;
use chat_relay::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let addr = config.listen_addr();

    tracing::info!(
        ollama_url = %config.ollama_url,
        model = %config.ollama_model,
        origins = ?config.allowed_origins,
        "relay configured"
    );

    let state = Arc::new(AppState::new(config)?);
    let app = routes::create_app(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str())
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    let local = listener.local_addr().context("failed to read bound address")?;
    tracing::info!("chat relay running at http://{local}");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
