//! Error types for the AeroDetect page.

use aerodetect_core::error::PredictionError;
use thiserror::Error;

/// Errors raised by the page itself, outside the upload workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    /// A picked file could not be read into memory
    #[error("Failed to read {name}: {message}")]
    FileRead { name: String, message: String },
    /// The page origin could not be determined
    #[error("Page origin unavailable: {0}")]
    Origin(String),
    /// The HTTP backend could not be constructed
    #[error("Prediction backend unavailable: {0}")]
    Backend(#[from] PredictionError),
}
