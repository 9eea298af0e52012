//! Property document generation API
//!
//! Accepts the four form fields over HTTP and returns a download
//! reference for a filled copy of the property document template. The
//! overlay logic itself lives in `docfill-core`; this crate owns the
//! routes, configuration, artifact naming, and static serving.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

use state::AppState;

/// Build the router with all routes and middleware attached.
pub fn app(state: Arc<AppState>) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/generate-document", post(handlers::generate_document))
        // Generated artifacts are served verbatim from disk
        .nest_service("/generated", ServeDir::new(&state.config.generated_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
