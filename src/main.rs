use anyhow::Context;
use songify_relay::{AppConfig, AppState, app};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_target(false)
        .init();

    let config = AppConfig::from_env()?;
    let port = config.port;
    let public_dir = config.public_dir.clone();
    let state = AppState::new(config).context("failed to build HTTP client")?;

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    info!("🎧 Songify relay listening on port {}", port);
    info!("📡 Queue endpoint: /cola");
    info!("📁 Static files from {:?}", public_dir);

    axum::serve(listener, app(state))
        .await
        .context("server stopped unexpectedly")?;
    Ok(())
}
