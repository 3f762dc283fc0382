//! Error types for the gallery model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalleryModelError {
    #[error("Malformed gallery document: {0}")]
    MalformedDocument(#[from] serde_json::Error),

    #[error("Invalid dimension string: {0}")]
    InvalidDimensions(String),
}

pub type Result<T> = std::result::Result<T, GalleryModelError>;
