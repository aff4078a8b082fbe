//! Interpretation of prediction backend replies.
//!
//! Both routes answer with a JSON object. The video route signals failure with
//! a non-success status or an `error` field; the images route only with an
//! `error` field, and a missing `result_images` array is a soft failure the UI
//! reports separately.

use crate::error::PredictionError;
use bytes::Bytes;
use serde_json::Value;
use url::Url;

/// Raw HTTP reply from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendReply {
    pub status: u16,
    pub body: Bytes,
}

impl BackendReply {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Convenience constructor for JSON bodies.
    pub fn json(status: u16, value: &Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn parse_json(&self) -> Result<Value, PredictionError> {
        serde_json::from_slice(&self.body).map_err(|e| PredictionError::Decode(e.to_string()))
    }
}

/// Outcome of a successful images reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagesReply {
    /// One entry per position; non-string entries become `None`
    Results(Vec<Option<String>>),
    /// `result_images` absent or not an array
    Missing,
}

/// Extracts the `error` field, if the payload carries one.
fn error_field(payload: &Value) -> Option<String> {
    match payload.get("error") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        Some(other) => Some(other.to_string()),
    }
}

/// Interprets a video route reply, returning the result video path.
pub fn interpret_video_reply(reply: &BackendReply) -> Result<String, PredictionError> {
    let payload = reply.parse_json()?;

    if let Some(message) = error_field(&payload) {
        return Err(if reply.is_success() {
            PredictionError::Backend(message)
        } else {
            PredictionError::Status {
                status: reply.status,
                message,
            }
        });
    }

    if !reply.is_success() {
        return Err(PredictionError::Status {
            status: reply.status,
            message: "Video prediction failed".to_string(),
        });
    }

    payload
        .get("video_url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| PredictionError::MalformedResponse("missing video_url".to_string()))
}

/// Interprets an images route reply.
///
/// The HTTP status is not consulted: the backend reports image failures
/// through the `error` field.
pub fn interpret_images_reply(reply: &BackendReply) -> Result<ImagesReply, PredictionError> {
    let payload = reply.parse_json()?;

    if let Some(message) = error_field(&payload) {
        return Err(PredictionError::Backend(message));
    }

    match payload.get("result_images") {
        Some(Value::Array(entries)) => Ok(ImagesReply::Results(
            entries
                .iter()
                .map(|entry| entry.as_str().map(str::to_string))
                .collect(),
        )),
        _ => Ok(ImagesReply::Missing),
    }
}

/// Resolves a result path against the page origin.
pub fn resolve_against_origin(origin: &Url, path: &str) -> Result<Url, PredictionError> {
    origin
        .join(path)
        .map_err(|e| PredictionError::InvalidUrl(format!("{}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_success() {
        let reply = BackendReply::json(200, &json!({ "video_url": "/output/clip_output.mp4" }));
        assert_eq!(
            interpret_video_reply(&reply).unwrap(),
            "/output/clip_output.mp4"
        );
    }

    #[test]
    fn test_video_error_field_wins_over_status() {
        let ok_with_error = BackendReply::json(200, &json!({ "error": "boom" }));
        assert_eq!(
            interpret_video_reply(&ok_with_error),
            Err(PredictionError::Backend("boom".to_string()))
        );

        let failed = BackendReply::json(500, &json!({ "error": "Cannot open video file" }));
        assert_eq!(
            interpret_video_reply(&failed),
            Err(PredictionError::Status {
                status: 500,
                message: "Cannot open video file".to_string()
            })
        );
    }

    #[test]
    fn test_video_non_ok_without_error() {
        let reply = BackendReply::json(502, &json!({}));
        assert!(matches!(
            interpret_video_reply(&reply),
            Err(PredictionError::Status { status: 502, .. })
        ));
    }

    #[test]
    fn test_video_non_json_body() {
        let reply = BackendReply::new(502, "<html>Bad Gateway</html>");
        assert!(matches!(
            interpret_video_reply(&reply),
            Err(PredictionError::Decode(_))
        ));
    }

    #[test]
    fn test_video_missing_url() {
        let reply = BackendReply::json(200, &json!({ "video_url": 42 }));
        assert!(matches!(
            interpret_video_reply(&reply),
            Err(PredictionError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_images_results() {
        let reply = BackendReply::json(
            200,
            &json!({ "result_images": ["data:image/png;base64,AAA", 7, "data:image/png;base64,CCC"] }),
        );
        assert_eq!(
            interpret_images_reply(&reply).unwrap(),
            ImagesReply::Results(vec![
                Some("data:image/png;base64,AAA".to_string()),
                None,
                Some("data:image/png;base64,CCC".to_string()),
            ])
        );
    }

    #[test]
    fn test_images_error_and_missing() {
        let error = BackendReply::json(400, &json!({ "error": "model unavailable" }));
        assert_eq!(
            interpret_images_reply(&error),
            Err(PredictionError::Backend("model unavailable".to_string()))
        );

        let empty = BackendReply::json(200, &json!({}));
        assert_eq!(interpret_images_reply(&empty).unwrap(), ImagesReply::Missing);

        let wrong_type = BackendReply::json(200, &json!({ "result_images": "nope" }));
        assert_eq!(
            interpret_images_reply(&wrong_type).unwrap(),
            ImagesReply::Missing
        );
    }

    #[test]
    fn test_null_error_is_ignored() {
        let reply = BackendReply::json(200, &json!({ "error": null, "result_images": [] }));
        assert_eq!(
            interpret_images_reply(&reply).unwrap(),
            ImagesReply::Results(Vec::new())
        );
    }

    #[test]
    fn test_resolve_against_origin() {
        let origin = Url::parse("http://localhost:8000").unwrap();
        assert_eq!(
            resolve_against_origin(&origin, "/media/out.mp4")
                .unwrap()
                .as_str(),
            "http://localhost:8000/media/out.mp4"
        );
    }
}
