//! Error types for aerodetect-core.
//!
//! Selection policy violations are not errors in this sense; they live in
//! [`crate::selection::Rejection`] because the workflow recovers from them
//! locally.

use thiserror::Error;

/// Errors that can occur during a prediction round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// Base URL or result URL could not be parsed or joined
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Building or sending the request failed
    #[error("Request failed: {0}")]
    Request(String),
    /// Backend answered with a non-success HTTP status
    #[error("Backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    /// Response body was not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Response payload carried an `error` field
    #[error("Backend reported an error: {0}")]
    Backend(String),
    /// Response was JSON but lacked a required field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// No backend could be configured for this page
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors that can occur while encoding or decoding media payloads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// String is not a `data:<mime>;base64,<payload>` URL
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
    /// Base64 payload could not be decoded
    #[error("Failed to decode base64 payload: {0}")]
    Decode(String),
    /// Payload exceeds the size that may be inlined
    #[error("{size} bytes exceeds the {limit} byte preview limit")]
    TooLarge { size: usize, limit: usize },
    /// Background encoding task failed
    #[error("Encoding task failed: {0}")]
    Task(String),
}

/// Convert from String to MediaError for platform::run_blocking compatibility
impl From<String> for MediaError {
    fn from(s: String) -> Self {
        MediaError::Task(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PredictionError::Status {
            status: 503,
            message: "model unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Backend returned HTTP 503: model unavailable"
        );
    }

    #[test]
    fn test_too_large_display() {
        let err = MediaError::TooLarge { size: 10, limit: 4 };
        assert_eq!(err.to_string(), "10 bytes exceeds the 4 byte preview limit");
    }

    #[test]
    fn test_media_error_from_string() {
        let err = MediaError::from("join failed".to_string());
        assert_eq!(err, MediaError::Task("join failed".to_string()));
    }
}
