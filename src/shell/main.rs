use std::net::SocketAddr;

use chrono::Utc;
use tracing_subscriber::{EnvFilter, fmt};

use memories::shell::config::Config;
use memories::shell::http::router;
use memories::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;
    let app = router(AppState::in_memory(Utc::now()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("memories API listening on port {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}
