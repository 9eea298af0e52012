//! Error types for docfill-core

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FillError {
    #[error("Failed to parse PDF template: {0}")]
    Parse(String),

    #[error("PDF template has no pages")]
    NoPages,

    #[error("Page {0} not found in template")]
    MissingPage(u32),

    #[error("Invalid or missing MediaBox: {0}")]
    MediaBox(String),

    #[error("Failed to serialize filled document: {0}")]
    Serialize(String),
}
