//! Upload workflow controller.
//!
//! Owns every piece of mutable page state: the selection, the preview board,
//! the "too many files" message, the video output, the loading indicator and
//! the pending notice. Each change goes through one of the transitions below;
//! the UI only renders what the controller holds.
//!
//! # Tickets
//!
//! Every reset bumps an epoch. Preview decodes and submissions carry the
//! [`Ticket`] they were started under, and work finishing under an older
//! ticket is not applied to the page. A stale submission still returns the
//! loading indicator to idle.
//!
//! ```
//! use aerodetect_core::controller::UploadController;
//! use aerodetect_core::media::SelectedFile;
//!
//! let mut controller = UploadController::new();
//! let plan = controller
//!     .select(vec![SelectedFile::new("a.png", "image/png", vec![1u8, 2, 3])])
//!     .unwrap();
//! assert_eq!(plan.images().len(), 1);
//! ```

use crate::config::messages;
use crate::dispatch::{PredictionRequest, SubmissionOutcome};
use crate::indicator::LoadingIndicator;
use crate::media::SelectedFile;
use crate::preview::{PreviewBoard, VideoPreview};
use crate::selection::{validate, Rejection, Selection, SelectionKind};
use tracing::{debug, info, warn};

/// Identifies the selection a piece of async work belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// Transient message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MixedMedia,
    MultipleVideos,
    NoResultImages,
    UnsupportedFileType,
    DetectionFailed,
    ReadFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MixedMedia => messages::MIXED_MEDIA,
            Notice::MultipleVideos => messages::MULTIPLE_VIDEOS,
            Notice::NoResultImages => messages::NO_RESULT_IMAGES,
            Notice::UnsupportedFileType => messages::UNSUPPORTED_FILE_TYPE,
            Notice::DetectionFailed => messages::DETECTION_FAILED,
            Notice::ReadFailed => messages::READ_FAILED,
        }
    }
}

/// The processed-video player below the preview container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoOutput {
    pub src: Option<String>,
    pub visible: bool,
    /// Bumped each time a new result should be loaded and played
    pub playback: u64,
}

/// Preview work the UI must perform for an accepted selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewWork {
    /// Create an object URL for the video and hand it to
    /// [`UploadController::set_video_preview`]
    Video(SelectedFile),
    /// Decode each image and hand it to [`UploadController::record_preview`]
    Images(Vec<(usize, SelectedFile)>),
}

/// Returned by [`UploadController::select`] on acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewPlan {
    pub ticket: Ticket,
    pub kind: SelectionKind,
    pub work: PreviewWork,
}

impl PreviewPlan {
    /// Images to decode, empty for a video selection.
    pub fn images(&self) -> &[(usize, SelectedFile)] {
        match &self.work {
            PreviewWork::Images(images) => images,
            PreviewWork::Video(_) => &[],
        }
    }
}

/// A submission that has entered the loading state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: PredictionRequest,
}

/// Page state for the upload form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadController {
    selection: Option<Selection>,
    epoch: u64,
    picker_generation: u64,
    previews: PreviewBoard,
    limit_message_visible: bool,
    video_output: VideoOutput,
    indicator: LoadingIndicator,
    notice: Option<Notice>,
    retired_object_urls: Vec<String>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Read access
    // =========================================================================

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn previews(&self) -> &PreviewBoard {
        &self.previews
    }

    pub fn video_output(&self) -> &VideoOutput {
        &self.video_output
    }

    pub fn indicator(&self) -> LoadingIndicator {
        self.indicator
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn limit_message_visible(&self) -> bool {
        self.limit_message_visible
    }

    /// Key for the file input; a new value remounts it with an empty value.
    pub fn picker_generation(&self) -> u64 {
        self.picker_generation
    }

    pub fn current_ticket(&self) -> Ticket {
        Ticket(self.epoch)
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Clears everything a previous selection left on the page.
    ///
    /// Called as soon as the picker changes, before the new files are read.
    /// An in-flight submission keeps running; its ticket becomes stale.
    pub fn reset_for_new_selection(&mut self) {
        self.epoch += 1;
        self.selection = None;
        let retired = self.previews.clear();
        self.retire(retired);
        self.limit_message_visible = false;
        self.notice = None;
        self.video_output.visible = false;
        self.video_output.src = None;
        debug!("Selection reset (epoch {})", self.epoch);
    }

    /// Validates a new batch and, on acceptance, returns the preview work.
    ///
    /// Every rejection leaves the selection empty and bumps the picker
    /// generation so picking the same files again fires a new change.
    pub fn select(&mut self, files: Vec<SelectedFile>) -> Result<PreviewPlan, Rejection> {
        self.reset_for_new_selection();

        let selection = match validate(files) {
            Ok(selection) => selection,
            Err(rejection) => {
                info!("Selection rejected: {}", rejection);
                match rejection {
                    Rejection::MixedMedia { .. } => self.notice = Some(Notice::MixedMedia),
                    Rejection::TooManyImages { .. } => self.limit_message_visible = true,
                    Rejection::MultipleVideos { .. } => self.notice = Some(Notice::MultipleVideos),
                }
                self.picker_generation += 1;
                return Err(rejection);
            }
        };

        let work = match selection.video() {
            Some(video) => PreviewWork::Video(video.clone()),
            None => PreviewWork::Images(
                selection
                    .images()
                    .map(|(position, file)| (position, file.clone()))
                    .collect(),
            ),
        };

        let plan = PreviewPlan {
            ticket: self.current_ticket(),
            kind: selection.kind(),
            work,
        };
        self.selection = Some(selection);
        Ok(plan)
    }

    /// Rejects the whole batch when any picked file could not be read.
    ///
    /// Nothing is selected and the picker is cleared. Returns false if the
    /// ticket is stale.
    pub fn reject_unreadable(&mut self, ticket: Ticket, unreadable: &[String]) -> bool {
        if ticket != self.current_ticket() {
            debug!("Dropping stale read failure for {} file(s)", unreadable.len());
            return false;
        }
        self.reset_for_new_selection();
        warn!("Selection rejected; unreadable file(s): {}", unreadable.join(", "));
        self.notice = Some(Notice::ReadFailed);
        self.picker_generation += 1;
        true
    }

    /// Inserts a decoded image preview. Returns false if the ticket is stale.
    pub fn record_preview(&mut self, ticket: Ticket, position: usize, src: String) -> bool {
        if ticket != self.current_ticket() {
            debug!("Dropping stale preview for position {}", position);
            return false;
        }
        self.previews.insert_image(position, src);
        true
    }

    /// Shows the local video player. A stale object URL is retired at once.
    pub fn set_video_preview(&mut self, ticket: Ticket, preview: VideoPreview) -> bool {
        if ticket != self.current_ticket() {
            debug!("Dropping stale video preview {}", preview.name);
            self.retired_object_urls.push(preview.object_url);
            return false;
        }
        let previous = self.previews.set_video(preview);
        self.retire(previous);
        true
    }

    /// Enters the loading state and returns what to send.
    ///
    /// Returns `None` when there is nothing selected or a submission is
    /// already in flight.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        let selection = self.selection.as_ref().filter(|s| !s.is_empty())?;

        if self.indicator.is_active() {
            warn!("Submission already in flight; ignoring submit");
            return None;
        }

        let request = PredictionRequest::from_selection(selection);
        self.indicator = LoadingIndicator::Active;
        self.notice = None;
        Some(Submission {
            ticket: self.current_ticket(),
            request,
        })
    }

    /// Applies a submission outcome and leaves the loading state.
    pub fn complete_submission(&mut self, ticket: Ticket, outcome: SubmissionOutcome) {
        self.indicator = LoadingIndicator::Idle;

        if ticket != self.current_ticket() {
            match &outcome {
                SubmissionOutcome::VideoReady { url } => {
                    warn!("Discarding video result for a previous selection: {}", url)
                }
                SubmissionOutcome::ImagesReady { results } => warn!(
                    "Discarding {} image result(s) for a previous selection",
                    results.len()
                ),
                other => warn!("Discarding {:?} for a previous selection", other),
            }
            return;
        }

        match outcome {
            SubmissionOutcome::VideoReady { url } => {
                let retired = self.previews.clear();
                self.retire(retired);
                self.video_output.src = Some(url.to_string());
                self.video_output.visible = true;
                self.video_output.playback += 1;
                info!("Video result ready at {}", url);
            }
            SubmissionOutcome::ImagesReady { results } => {
                let applied = self.previews.apply_results(&results);
                info!("Applied {} of {} result image(s)", applied, results.len());
            }
            SubmissionOutcome::NoResults => self.notice = Some(Notice::NoResultImages),
            SubmissionOutcome::Unsupported => self.notice = Some(Notice::UnsupportedFileType),
            SubmissionOutcome::Failed(_) => self.notice = Some(Notice::DetectionFailed),
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Object URLs no longer shown anywhere; the caller must revoke them.
    pub fn take_retired_object_urls(&mut self) -> Vec<String> {
        std::mem::take(&mut self.retired_object_urls)
    }

    fn retire(&mut self, object_url: Option<String>) {
        if let Some(url) = object_url {
            self.retired_object_urls.push(url);
        }
    }
}
