//! Error types for cskin-preview.

use std::io;

/// Errors produced while loading or rendering a skin.
#[derive(Debug, thiserror::Error)]
pub enum SkinError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("root folder detection failed: {0}")]
    RootDetection(String),

    #[error("document error: {0}")]
    Document(String),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SkinError>;
