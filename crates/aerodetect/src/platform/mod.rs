//! Platform-specific browser glue.
//!
//! The page runs in two places with different capabilities:
//!
//! - **Web**: real DOM APIs via `web-sys` (object URLs, media playback,
//!   `window.location`)
//! - **Desktop**: a webview without direct DOM handles from Rust, so videos
//!   are previewed through data URLs and playback is driven by `autoplay`
//!
//! Every function here has both variants so components never need their own
//! `cfg` blocks.

use aerodetect_core::error::MediaError;
use aerodetect_core::media::SelectedFile;
use dioxus::logger::tracing::warn;
use url::Url;

/// Run a CPU-bound decode off the UI thread where a thread pool exists.
///
/// - **Desktop**: `tokio::task::spawn_blocking`
/// - **Web**: runs `f` directly
#[cfg(not(target_arch = "wasm32"))]
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: From<String> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| E::from(format!("Task join failed: {}", e)))?
}

/// Web version: executes directly on the single UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn run_blocking<F, T, E>(f: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    f()
}

/// Origin the page was served from; backend routes and result paths are
/// resolved against it.
#[cfg(target_arch = "wasm32")]
pub fn page_origin() -> Result<Url, String> {
    let origin = web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .location()
        .origin()
        .map_err(|e| format!("Failed to read location.origin: {:?}", e))?;
    Url::parse(&origin).map_err(|e| format!("Invalid page origin {}: {}", origin, e))
}

/// Desktop has no page origin; the backend address comes from the
/// environment, falling back to the local development server.
#[cfg(not(target_arch = "wasm32"))]
pub fn page_origin() -> Result<Url, String> {
    use aerodetect_core::config::{DEFAULT_SERVER_URL, SERVER_URL_ENV};

    let raw = std::env::var(SERVER_URL_ENV).unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
    Url::parse(&raw).map_err(|e| format!("Invalid server URL {}: {}", raw, e))
}

/// Creates a revocable `blob:` URL for a selected video.
#[cfg(target_arch = "wasm32")]
pub fn create_object_url(file: &SelectedFile) -> Result<String, MediaError> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_ref());
    let parts = js_sys::Array::of1(&bytes);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| MediaError::Decode(format!("Failed to create blob: {:?}", e)))?;
    web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| MediaError::Decode(format!("Failed to create object URL: {:?}", e)))
}

/// Desktop version: the webview cannot see Rust-side blobs, so the preview
/// is inlined as a data URL. Videos over
/// [`MAX_INLINE_PREVIEW_BYTES`](aerodetect_core::config::MAX_INLINE_PREVIEW_BYTES)
/// get no preview.
#[cfg(not(target_arch = "wasm32"))]
pub fn create_object_url(file: &SelectedFile) -> Result<String, MediaError> {
    inline_data_url(file, aerodetect_core::config::MAX_INLINE_PREVIEW_BYTES)
}

#[cfg(not(target_arch = "wasm32"))]
fn inline_data_url(file: &SelectedFile, limit: usize) -> Result<String, MediaError> {
    if file.size() > limit {
        return Err(MediaError::TooLarge {
            size: file.size(),
            limit,
        });
    }
    Ok(aerodetect_core::media::to_data_url(&file.mime, &file.bytes))
}

/// Releases an object URL created by [`create_object_url`].
#[cfg(target_arch = "wasm32")]
pub fn revoke_object_url(url: &str) {
    if let Err(e) = web_sys::Url::revoke_object_url(url) {
        warn!("Failed to revoke object URL {}: {:?}", url, e);
    }
}

/// Desktop version: data URLs hold no browser resources.
#[cfg(not(target_arch = "wasm32"))]
pub fn revoke_object_url(url: &str) {
    if !url.starts_with("data:") {
        warn!("Unexpected non-data preview URL: {}", url);
    }
}

/// Empties the file input with the given id so the same files can be
/// picked again.
#[cfg(target_arch = "wasm32")]
pub fn clear_file_input(element_id: &str) {
    use wasm_bindgen::JsCast;

    if let Some(input) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        if let Some(el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
            el.set_value("");
        }
    }
}

/// Desktop version: the input is remounted through its `key`.
#[cfg(not(target_arch = "wasm32"))]
pub fn clear_file_input(element_id: &str) {
    dioxus::logger::tracing::debug!("Remounting #{}", element_id);
}

/// Reloads and plays the video element with the given id.
#[cfg(target_arch = "wasm32")]
pub fn play_video(element_id: &str) {
    use wasm_bindgen::JsCast;

    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    else {
        warn!("Video element #{} not found", element_id);
        return;
    };

    let Some(video) = element.dyn_ref::<web_sys::HtmlVideoElement>() else {
        warn!("#{} is not a video element", element_id);
        return;
    };

    video.load();
    // play() rejects when autoplay is blocked; the controls remain usable
    if let Err(e) = video.play() {
        warn!("Video playback did not start: {:?}", e);
    }
}

/// Desktop version: the element is remounted with `autoplay`.
#[cfg(not(target_arch = "wasm32"))]
pub fn play_video(element_id: &str) {
    dioxus::logger::tracing::debug!("Autoplaying #{}", element_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct TestError(String);

    impl From<String> for TestError {
        fn from(s: String) -> Self {
            TestError(s)
        }
    }

    #[tokio::test]
    async fn test_run_blocking_success() {
        let result: Result<i32, TestError> = run_blocking(|| Ok(42)).await;
        assert_eq!(result, Ok(42));
    }

    #[tokio::test]
    async fn test_run_blocking_error() {
        let result: Result<i32, TestError> =
            run_blocking(|| Err(TestError("fail".to_string()))).await;
        assert_eq!(result, Err(TestError("fail".to_string())));
    }

    #[tokio::test]
    async fn test_run_blocking_decodes_preview() {
        let file = SelectedFile::new("a.png", "image/png", vec![0u8, 1, 2]);
        let src: Result<String, MediaError> =
            run_blocking(move || aerodetect_core::preview::render_image_preview(&file)).await;
        assert_eq!(src.unwrap(), "data:image/png;base64,AAEC");
    }

    #[test]
    fn test_desktop_object_url_is_data_url() {
        let file = SelectedFile::new("clip.mp4", "video/mp4", vec![0u8, 1, 2]);
        assert_eq!(
            create_object_url(&file).unwrap(),
            "data:video/mp4;base64,AAEC"
        );
    }

    #[test]
    fn test_desktop_preview_skips_oversized_video() {
        let file = SelectedFile::new("clip.mp4", "video/mp4", vec![0u8; 5]);
        assert_eq!(
            inline_data_url(&file, 4),
            Err(MediaError::TooLarge { size: 5, limit: 4 })
        );
        assert!(inline_data_url(&file, 5).is_ok());
    }
}
