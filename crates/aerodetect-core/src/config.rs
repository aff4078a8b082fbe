//! Production configuration constants.
//!
//! Limits, routes, multipart field names and the user-facing messages shared by
//! the web UI and the CLI.
//!
//! # Usage
//!
//! ```
//! use aerodetect_core::config::{IMAGES_ROUTE, MAX_IMAGE_COUNT};
//!
//! assert_eq!(IMAGES_ROUTE, "/predict/images/");
//! assert!(MAX_IMAGE_COUNT > 1);
//! ```

// =============================================================================
// Selection Limits
// =============================================================================

/// Maximum number of still images in one submission.
pub const MAX_IMAGE_COUNT: usize = 8;

/// Maximum number of videos in one submission.
pub const MAX_VIDEO_COUNT: usize = 1;

/// Largest video the desktop build inlines as a data URL for its local
/// preview. Bigger videos are still submitted, just not previewed.
pub const MAX_INLINE_PREVIEW_BYTES: usize = 64 * 1024 * 1024;

/// `accept` attribute of the file picker.
pub const PICKER_ACCEPT: &str = "image/*,video/*";

// =============================================================================
// Backend Routes
// =============================================================================

/// Route receiving a single video as multipart field [`VIDEO_FIELD`].
pub const VIDEO_ROUTE: &str = "/predict/video/";

/// Route receiving the image batch as repeated multipart field [`IMAGES_FIELD`].
pub const IMAGES_ROUTE: &str = "/predict/images/";

/// Multipart field name carrying the video file.
pub const VIDEO_FIELD: &str = "video";

/// Multipart field name repeated once per image file.
pub const IMAGES_FIELD: &str = "files";

/// Environment variable overriding the backend base URL outside the browser.
pub const SERVER_URL_ENV: &str = "AERODETECT_SERVER_URL";

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

// =============================================================================
// Media Types
// =============================================================================

/// File extensions treated as still images when no MIME type is available.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "jfif", "jpe", "png", "tif", "tiff", "webp", "bmp", "gif",
];

/// File extensions treated as videos when no MIME type is available.
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mkv", "mov", "avi", "flv", "wmv", "mpeg"];

// =============================================================================
// User-facing Messages
// =============================================================================

pub mod messages {
    pub const MIXED_MEDIA: &str = "Please upload either images or a single video, not both.";
    pub const TOO_MANY_IMAGES: &str = "You can upload a maximum of 8 images.";
    pub const MULTIPLE_VIDEOS: &str = "Please upload only one video at a time.";
    pub const NO_RESULT_IMAGES: &str = "No result images received.";
    pub const UNSUPPORTED_FILE_TYPE: &str = "Unsupported file type.";
    pub const DETECTION_FAILED: &str = "Detection failed. Check logs.";
    pub const READ_FAILED: &str = "Some files could not be read. Please select them again.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_are_absolute_paths() {
        for route in [VIDEO_ROUTE, IMAGES_ROUTE] {
            assert!(route.starts_with('/'), "{route} must be origin-relative");
            assert!(route.ends_with('/'), "{route} must keep its trailing slash");
        }
    }

    #[test]
    fn test_limit_message_matches_limit() {
        assert!(messages::TOO_MANY_IMAGES.contains(&MAX_IMAGE_COUNT.to_string()));
    }

    #[test]
    fn test_extension_tables_are_disjoint() {
        for ext in IMAGE_EXTENSIONS {
            assert!(!VIDEO_EXTENSIONS.contains(ext), "{ext} listed twice");
        }
    }
}
