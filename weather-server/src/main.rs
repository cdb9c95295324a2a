use anyhow::Context;
use tracing_subscriber::EnvFilter;
use weather_core::Config;
use weather_server::{AppState, router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = Config::load()?;
    let client = match cfg.client() {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    };

    let app = router(AppState { client, country: cfg.country.clone() });

    let addr = format!("0.0.0.0:{}", cfg.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Server is running on port {}", cfg.port);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
