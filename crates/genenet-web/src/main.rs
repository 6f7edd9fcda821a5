//! Genenet Web Server
//!
//! Run with: cargo run -p genenet-web

use genenet_config::Config;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Genenet Web Server...");

    let config = Config::load()?;
    let addr = config.bind_addr();

    // Create app state
    let state = genenet_web::state::AppState::from_config(config)?;

    // Build router
    let app = genenet_web::router::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
