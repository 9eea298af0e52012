//! Error types for the document API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docfill_core::FillError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Template file not found")]
    TemplateMissing,

    #[error("Fill error: {0}")]
    Fill(#[from] FillError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingFields => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "All fields are required" }),
            ),
            ApiError::TemplateMissing => {
                tracing::error!("Template file is missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Template file not found" }),
                )
            }
            ApiError::Fill(FillError::NoPages) => {
                tracing::error!("Template has no pages");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "PDF template has no pages" }),
                )
            }
            ApiError::Fill(e) => {
                tracing::error!("Error generating document: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to generate document", "details": e.to_string() }),
                )
            }
            ApiError::Io(e) => {
                tracing::error!("Error generating document: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to generate document", "details": e.to_string() }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
