//! Selection validation.
//!
//! A selection is either a batch of still images or exactly one video. The
//! rules are checked in a fixed order so the user always gets the same
//! message for the same batch:
//!
//! 1. images and videos mixed
//! 2. more than [`MAX_IMAGE_COUNT`] images
//! 3. more than [`MAX_VIDEO_COUNT`] videos
//!
//! Files that are neither images nor videos do not trigger a rejection here.
//! They are carried along and surface as "unsupported" at submission time.

use crate::config::{messages, MAX_IMAGE_COUNT, MAX_VIDEO_COUNT};
use crate::media::{MediaKind, SelectedFile};
use thiserror::Error;
use tracing::{debug, info};

/// Derived classification of an accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Zero or more images (and possibly unsupported files)
    Images,
    /// Exactly one video
    Video,
}

/// Why a batch of files was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{}", messages::MIXED_MEDIA)]
    MixedMedia { images: usize, videos: usize },
    #[error("{}", messages::TOO_MANY_IMAGES)]
    TooManyImages { count: usize },
    #[error("{}", messages::MULTIPLE_VIDEOS)]
    MultipleVideos { count: usize },
}

/// Per-kind file counts of a raw batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaCounts {
    pub images: usize,
    pub videos: usize,
    pub other: usize,
}

impl MediaCounts {
    pub fn of(files: &[SelectedFile]) -> Self {
        files
            .iter()
            .fold(MediaCounts::default(), |mut counts, file| {
                match file.kind() {
                    MediaKind::Image => counts.images += 1,
                    MediaKind::Video => counts.videos += 1,
                    MediaKind::Other => counts.other += 1,
                }
                counts
            })
    }
}

/// A validated, ordered set of files.
///
/// Only [`validate`] constructs one, so holding a `Selection` means the
/// policy checks already passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    files: Vec<SelectedFile>,
    kind: SelectionKind,
}

impl Selection {
    pub fn kind(&self) -> SelectionKind {
        self.kind
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Image files paired with their position tag.
    ///
    /// Positions count image files only, in selection order. They match the
    /// order in which images are sent to the backend, and therefore the
    /// index of each entry in the backend's `result_images`.
    pub fn images(&self) -> impl Iterator<Item = (usize, &SelectedFile)> {
        self.files
            .iter()
            .filter(|f| f.kind() == MediaKind::Image)
            .enumerate()
    }

    /// The selected video, if this is a video selection.
    pub fn video(&self) -> Option<&SelectedFile> {
        match self.kind {
            SelectionKind::Video => self.files.iter().find(|f| f.kind() == MediaKind::Video),
            SelectionKind::Images => None,
        }
    }
}

/// Validates a freshly picked batch of files.
pub fn validate(files: Vec<SelectedFile>) -> Result<Selection, Rejection> {
    let counts = MediaCounts::of(&files);
    debug!(
        "Validating selection: {} images, {} videos, {} other",
        counts.images, counts.videos, counts.other
    );

    if counts.images > 0 && counts.videos > 0 {
        return Err(Rejection::MixedMedia {
            images: counts.images,
            videos: counts.videos,
        });
    }

    if counts.images > MAX_IMAGE_COUNT {
        return Err(Rejection::TooManyImages {
            count: counts.images,
        });
    }

    if counts.videos > MAX_VIDEO_COUNT {
        return Err(Rejection::MultipleVideos {
            count: counts.videos,
        });
    }

    let kind = if counts.videos == 1 {
        SelectionKind::Video
    } else {
        SelectionKind::Images
    };

    info!("Accepted {} file(s) as {:?} selection", files.len(), kind);
    Ok(Selection { files, kind })
}
