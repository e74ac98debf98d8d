//! # Error Types
//!
//! This module defines error types used throughout the qrsmith library.

use thiserror::Error;

/// Main error type for qrsmith operations
#[derive(Debug, Error)]
pub enum QrsmithError {
    /// The job file is missing a required field or is otherwise unusable
    #[error("{0}")]
    InvalidJob(String),

    /// An option value is out of range or has the wrong shape
    #[error("Invalid option '{option}': {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    /// A referenced file (logo, source image) does not exist
    #[error("{kind} file not found: {path}")]
    NotFound { kind: &'static str, path: String },

    /// QR symbol encoding failed
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// Image decoding, processing or encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Decoding found nothing to read
    #[error("No QR codes found in the image")]
    NoCodesFound,

    /// A detected symbol could not be read
    #[error("Decode error: {0}")]
    Decode(String),

    /// Output container not supported by the entry point
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// JSON parse or write error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QrsmithError {
    pub(crate) fn not_found(kind: &'static str, path: &std::path::Path) -> Self {
        QrsmithError::NotFound {
            kind,
            path: path.display().to_string(),
        }
    }
}
