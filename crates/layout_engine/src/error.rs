//! Error types for the layout engine
//!
//! Malformed artwork data never surfaces as an error: the engine absorbs
//! it with defaults and diagnostics. The only reportable failure is a
//! gallery with nothing to place.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Gallery could not be loaded: {reason}")]
    Unavailable { reason: String },

    #[error("Gallery model error: {0}")]
    Model(#[from] gallery_model::GalleryModelError),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
