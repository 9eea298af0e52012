//! HTTP handlers for the document API

use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use docfill_core::fill_template;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Liveness/info payload listing the available endpoints
pub async fn index() -> Json<InfoResponse> {
    Json(InfoResponse {
        status: "success",
        message: "Backend is running!",
        timestamp: Utc::now().to_rfc3339(),
        endpoints: Endpoints {
            health: "/health",
            generate_document: "/generate-document",
        },
    })
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "Server is running",
    })
}

/// Core operation: validate the fields, stamp the template, persist the
/// artifact under a fresh name, and report where to fetch it.
pub async fn generate_document(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // Reject incomplete input before any file I/O
    let fields = req.into_fields().ok_or(ApiError::MissingFields)?;

    let template = tokio::fs::read(&state.config.template_path)
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ApiError::TemplateMissing
            } else {
                ApiError::Io(e)
            }
        })?;

    let filled = fill_template(&template, &fields)?;

    let filename = format!("property_document_{}.pdf", state.next_artifact_id());
    let output_path = state.config.generated_dir.join(&filename);
    tokio::fs::write(&output_path, &filled).await?;

    tracing::info!("Generated document: {}", filename);

    Ok(Json(GenerateResponse {
        success: true,
        message: "Document generated successfully".to_string(),
        download_url: state.config.download_url(&filename),
        filename,
    }))
}
