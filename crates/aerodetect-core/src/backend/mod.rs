//! Prediction backend abstraction.
//!
//! The workflow only needs two operations: post a video, post a batch of
//! images. Interpreting the reply is left to [`crate::protocol`], so a backend
//! implementation is pure transport.
//!
//! # Implementations
//!
//! - [`HttpBackend`] - reqwest over HTTP (browser `fetch()` on wasm32)
//! - test doubles in unit and integration tests

mod http;

pub use http::HttpBackend;

use crate::error::PredictionError;
use crate::media::SelectedFile;
use crate::protocol::BackendReply;
use url::Url;

/// Transport to the prediction routes.
///
/// Futures are not required to be `Send`: on the web everything runs on the
/// single UI thread.
#[async_trait::async_trait(?Send)]
pub trait PredictionBackend {
    /// Posts one video to the video route.
    #[must_use = "Prediction failures should be handled"]
    async fn predict_video(&self, video: &SelectedFile) -> Result<BackendReply, PredictionError>;

    /// Posts every image, in order, to the images route.
    #[must_use = "Prediction failures should be handled"]
    async fn predict_images(
        &self,
        images: &[SelectedFile],
    ) -> Result<BackendReply, PredictionError>;

    /// Origin that result paths are resolved against.
    fn origin(&self) -> &Url;
}
