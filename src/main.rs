use std::time::Duration;
use tracing::info;

use rigorcheck::config::Config;
use rigorcheck::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    info!("[rigorcheck] Starting rigorcheck server");
    info!("[rigorcheck] Scoring service: {}", config.backend_url);
    info!("[rigorcheck] Base URL: {}", config.base_url);
    info!("[rigorcheck] Upload limit: {} bytes", config.max_upload_bytes);

    let state = AppState::new(config.clone());

    // Periodic eviction of idle browser sessions
    let sessions = state.sessions.clone();
    let ttl = config.session_ttl;
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(600));
        loop {
            interval.tick().await;
            sessions.evict_idle(ttl);
        }
    });

    let app = rigorcheck::build_app(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[rigorcheck] Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
