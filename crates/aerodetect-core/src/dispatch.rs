//! Submission dispatch.
//!
//! Turns a validated selection into exactly one backend request and folds the
//! reply into a [`SubmissionOutcome`]. Every failure becomes an outcome value;
//! nothing here panics or short-circuits, so the caller can always return the
//! loading indicator to idle afterwards.

use crate::backend::PredictionBackend;
use crate::error::PredictionError;
use crate::media::SelectedFile;
use crate::protocol::{
    interpret_images_reply, interpret_video_reply, resolve_against_origin, ImagesReply,
};
use crate::selection::{Selection, SelectionKind};
use tracing::{error, info, warn};
use url::Url;

/// What a submission will send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionRequest {
    Video(SelectedFile),
    Images(Vec<SelectedFile>),
    /// Neither images nor a video; no request is sent
    Unsupported,
}

impl PredictionRequest {
    pub fn from_selection(selection: &Selection) -> Self {
        if let Some(video) = selection.video() {
            return PredictionRequest::Video(video.clone());
        }

        let images: Vec<SelectedFile> = match selection.kind() {
            SelectionKind::Images => selection.images().map(|(_, f)| f.clone()).collect(),
            SelectionKind::Video => Vec::new(),
        };

        if images.is_empty() {
            PredictionRequest::Unsupported
        } else {
            PredictionRequest::Images(images)
        }
    }
}

/// Result of one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Processed video is ready at `url`
    VideoReady { url: Url },
    /// Result image per position (`None` for unusable entries)
    ImagesReady { results: Vec<Option<String>> },
    /// Images reply without a usable `result_images` array
    NoResults,
    /// Selection had nothing to send
    Unsupported,
    Failed(PredictionError),
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SubmissionOutcome::VideoReady { .. } | SubmissionOutcome::ImagesReady { .. }
        )
    }
}

/// Sends `request` to `backend` and interprets the reply.
pub async fn dispatch<B>(backend: &B, request: &PredictionRequest) -> SubmissionOutcome
where
    B: PredictionBackend + ?Sized,
{
    let outcome = match request {
        PredictionRequest::Video(video) => {
            info!("Submitting video {} ({} bytes)", video.name, video.size());
            match predict_video(backend, video).await {
                Ok(url) => SubmissionOutcome::VideoReady { url },
                Err(e) => SubmissionOutcome::Failed(e),
            }
        }
        PredictionRequest::Images(images) => {
            info!("Submitting {} image(s)", images.len());
            match predict_images(backend, images).await {
                Ok(ImagesReply::Results(results)) => SubmissionOutcome::ImagesReady { results },
                Ok(ImagesReply::Missing) => {
                    warn!("Images reply carried no result_images array");
                    SubmissionOutcome::NoResults
                }
                Err(e) => SubmissionOutcome::Failed(e),
            }
        }
        PredictionRequest::Unsupported => {
            warn!("Selection contains neither images nor a video; nothing sent");
            SubmissionOutcome::Unsupported
        }
    };

    if let SubmissionOutcome::Failed(e) = &outcome {
        error!("Detection failed: {}", e);
    }
    outcome
}

async fn predict_video<B>(backend: &B, video: &SelectedFile) -> Result<Url, PredictionError>
where
    B: PredictionBackend + ?Sized,
{
    let reply = backend.predict_video(video).await?;
    let path = interpret_video_reply(&reply)?;
    resolve_against_origin(backend.origin(), &path)
}

async fn predict_images<B>(
    backend: &B,
    images: &[SelectedFile],
) -> Result<ImagesReply, PredictionError>
where
    B: PredictionBackend + ?Sized,
{
    let reply = backend.predict_images(images).await?;
    interpret_images_reply(&reply)
}
