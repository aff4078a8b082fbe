//! Media classification and data URL helpers.
//!
//! Files are classified by their declared MIME type only; content sniffing is
//! the backend's job. Outside the browser (CLI) there is no declared type, so
//! [`mime_for_path`] derives one from the file extension.

use crate::config::{IMAGE_EXTENSIONS, VIDEO_EXTENSIONS};
use crate::error::MediaError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use bytes::Bytes;
use std::fmt;
use std::path::Path;

/// Fallback MIME type for files of unknown type.
const OCTET_STREAM: &str = "application/octet-stream";

/// Coarse media type of a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    /// Anything else, including files with an empty type
    Other,
}

impl MediaKind {
    /// Classifies a MIME type string (`image/*`, `video/*`, other).
    pub fn from_mime(mime: &str) -> Self {
        if mime.starts_with("image/") {
            MediaKind::Image
        } else if mime.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::Other
        }
    }
}

/// A file chosen by the user, held in memory until submission.
///
/// `bytes` is reference counted, so cloning a file (for a preview task or a
/// request) does not copy its contents.
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            bytes: bytes.into(),
        }
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::from_mime(&self.mime)
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Guesses a MIME type from a path's extension (case-insensitive).
///
/// Returns `application/octet-stream` for unknown extensions, which
/// classifies as [`MediaKind::Other`].
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" | "jpe" => "image/jpeg",
        "png" => "image/png",
        "tif" | "tiff" => "image/tiff",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "gif" => "image/gif",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "mov" => "video/quicktime",
        "avi" => "video/x-msvideo",
        "flv" => "video/x-flv",
        "wmv" => "video/x-ms-wmv",
        "mpeg" => "video/mpeg",
        _ => OCTET_STREAM,
    }
}

/// Returns true if the extension is in one of the known media tables.
pub fn is_known_media_extension(ext: &str) -> bool {
    let ext = ext.to_ascii_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str()) || VIDEO_EXTENSIONS.contains(&ext.as_str())
}

/// File extension to use when saving a payload of the given MIME type.
pub fn extension_for_mime(mime: &str) -> &'static str {
    match mime {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        "image/bmp" => "bmp",
        "image/tiff" => "tiff",
        _ => "bin",
    }
}

/// Encodes bytes as an embeddable `data:` URL.
///
/// This is what the preview renderer displays for still images, so no
/// network round-trip is needed before submission.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { OCTET_STREAM } else { mime };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// A decoded `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Decodes a base64 `data:` URL as returned by the images route.
pub fn decode_data_url(url: &str) -> Result<DataUrl, MediaError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| MediaError::InvalidDataUrl("missing data: prefix".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| MediaError::InvalidDataUrl("missing ',' separator".to_string()))?;

    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| MediaError::InvalidDataUrl("payload is not base64".to_string()))?;

    let bytes = STANDARD
        .decode(payload.trim())
        .map_err(|e| MediaError::Decode(e.to_string()))?;

    Ok(DataUrl {
        mime: if mime.is_empty() {
            OCTET_STREAM.to_string()
        } else {
            mime.to_string()
        },
        bytes,
    })
}
