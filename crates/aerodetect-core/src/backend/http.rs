//! HTTP transport for the prediction routes.
//!
//! reqwest works on both native and WASM platforms:
//! - Native: hyper with rustls-tls
//! - WASM: the browser's fetch() API, so requests carry the page's cookies
//!   and obey its same-origin rules
//!
//! One `reqwest::Client` is kept per backend and cloned cheaply; it pools
//! connections internally.

use super::PredictionBackend;
use crate::config::{IMAGES_FIELD, IMAGES_ROUTE, VIDEO_FIELD, VIDEO_ROUTE};
use crate::error::PredictionError;
use crate::media::SelectedFile;
use crate::protocol::BackendReply;
use reqwest::multipart::{Form, Part};
use tracing::debug;
use url::Url;

/// Prediction backend reached over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Creates a backend rooted at `base_url` (normally the page origin).
    ///
    /// **Example:**
    /// ```
    /// use aerodetect_core::backend::{HttpBackend, PredictionBackend};
    ///
    /// let backend = HttpBackend::new("http://127.0.0.1:8000").unwrap();
    /// assert_eq!(backend.origin().as_str(), "http://127.0.0.1:8000/");
    /// ```
    pub fn new(base_url: &str) -> Result<Self, PredictionError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| PredictionError::Request(format!("Failed to build HTTP client: {}", e)))?;
        Self::with_client(client, base_url)
    }

    /// Creates a backend that shares an existing client.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, PredictionError> {
        let parsed = Url::parse(base_url)
            .map_err(|e| PredictionError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PredictionError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    fn endpoint(&self, route: &str) -> Result<Url, PredictionError> {
        self.base_url
            .join(route)
            .map_err(|e| PredictionError::InvalidUrl(format!("{}: {}", route, e)))
    }

    async fn post(&self, route: &str, form: Form) -> Result<BackendReply, PredictionError> {
        let url = self.endpoint(route)?;

        let response = self
            .client
            .post(url.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| PredictionError::Request(format!("Failed to post to {}: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            PredictionError::Request(format!("Failed to read response body: {}", e))
        })?;

        debug!("POST {} -> {} ({} bytes)", url, status, body.len());
        Ok(BackendReply { status, body })
    }
}

/// Builds a multipart part carrying the file's name and MIME type.
fn file_part(file: &SelectedFile) -> Result<Part, PredictionError> {
    let part = file_body(file).file_name(file.name.clone());
    if file.mime.is_empty() {
        return Ok(part);
    }
    part.mime_str(&file.mime)
        .map_err(|e| PredictionError::Request(format!("Invalid MIME type {}: {}", file.mime, e)))
}

/// Shares the file's buffer with the request body.
#[cfg(not(target_arch = "wasm32"))]
fn file_body(file: &SelectedFile) -> Part {
    Part::stream_with_length(file.bytes.clone(), file.size() as u64)
}

/// Web version: the fetch body is copied into a JS array either way.
#[cfg(target_arch = "wasm32")]
fn file_body(file: &SelectedFile) -> Part {
    Part::bytes(file.bytes.to_vec())
}

#[async_trait::async_trait(?Send)]
impl PredictionBackend for HttpBackend {
    async fn predict_video(&self, video: &SelectedFile) -> Result<BackendReply, PredictionError> {
        let form = Form::new().part(VIDEO_FIELD, file_part(video)?);
        self.post(VIDEO_ROUTE, form).await
    }

    async fn predict_images(
        &self,
        images: &[SelectedFile],
    ) -> Result<BackendReply, PredictionError> {
        let mut form = Form::new();
        for image in images {
            form = form.part(IMAGES_FIELD, file_part(image)?);
        }
        self.post(IMAGES_ROUTE, form).await
    }

    fn origin(&self) -> &Url {
        &self.base_url
    }
}
