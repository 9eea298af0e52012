//! Property document API server
//!
//! Provides REST endpoints for:
//! - Document generation from form fields
//! - Static retrieval of generated artifacts
//! - Liveness checks

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use docfill_api::config::AppConfig;
use docfill_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("docfill_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    info!("Initializing docfill API...");
    let config = AppConfig::from_env();
    config.init_dirs()?;
    info!("Template: {}", config.template_path.display());
    info!("Generated artifacts: {}", config.generated_dir.display());

    let port = config.port;
    let state = Arc::new(AppState::new(config));
    let app = docfill_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting docfill API on http://{}", addr);
    info!("Health check: http://localhost:{}/health", port);
    info!(
        "Document generation: http://localhost:{}/generate-document",
        port
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
