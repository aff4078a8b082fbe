//! UI components for the AeroDetect page.
//!
//! - [`UploadForm`]: file picker, limit message, selection summary, submit
//! - [`PreviewPanel`]: local previews, replaced by results in place
//! - [`LoadingBar`]: request-in-flight indicator
//! - [`NoticeBanner`]: transient user notices
//! - [`VideoOutput`]: processed video player
//!
//! # Context Providers
//!
//! All page state lives in one [`UploadController`] shared through context;
//! components render from it and mutate it only through its transitions.
//!
//! ```ignore
//! let mut controller = use_controller();
//! let busy = controller.read().indicator().is_active();
//! controller.write().dismiss_notice();
//! ```

mod loading_bar;
mod notice;
mod preview_panel;
mod upload_form;
mod video_output;

pub use loading_bar::LoadingBar;
pub use notice::NoticeBanner;
pub use preview_panel::PreviewPanel;
pub use upload_form::UploadForm;
pub use video_output::VideoOutput;

use crate::error::UploadError;
use crate::platform;
use aerodetect_core::backend::HttpBackend;
use aerodetect_core::controller::UploadController;
use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;

/// Backend handle shared through context. Construction can fail (bad page
/// origin); the failure is reported when the user submits.
pub type BackendState = Result<HttpBackend, UploadError>;

// Controller context provider
pub fn use_controller() -> Signal<UploadController> {
    use_context::<Signal<UploadController>>()
}

// Backend context provider
pub fn use_backend() -> BackendState {
    use_context::<BackendState>()
}

/// Revokes object URLs the controller no longer displays.
pub(crate) fn release_retired_urls(mut controller: Signal<UploadController>) {
    let retired = controller.write().take_retired_object_urls();
    for url in retired {
        platform::revoke_object_url(&url);
    }
}

fn connect_backend() -> BackendState {
    let origin = platform::page_origin().map_err(UploadError::Origin)?;
    let backend = HttpBackend::new(origin.as_str())?;
    info!("Prediction backend at {}", origin);
    Ok(backend)
}

#[component]
pub fn App() -> Element {
    let controller = use_signal(UploadController::new);
    use_context_provider(|| controller);

    let backend = use_hook(|| {
        let backend = connect_backend();
        if let Err(e) = &backend {
            error!("{}", e);
        }
        backend
    });
    use_context_provider(|| backend);

    rsx! {
        div { class: "ad-app",
            header { class: "ad-header",
                h1 { class: "ad-title", "AeroDetect" }
                p { class: "ad-subtitle",
                    "Upload up to 8 images or a single video to detect drones."
                }
            }
            LoadingBar {}
            NoticeBanner {}
            main { class: "ad-main",
                UploadForm {}
                PreviewPanel {}
                VideoOutput {}
            }
        }
    }
}
