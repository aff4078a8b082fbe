use super::use_controller;
use dioxus::prelude::*;

/// Preview container.
///
/// Image previews are rendered in the order their decodes finished; each
/// carries its position tag so results land on the right node.
#[component]
pub fn PreviewPanel() -> Element {
    let controller = use_controller();
    let (images, video) = {
        let state = controller.read();
        let previews = state.previews();
        (previews.images().to_vec(), previews.video().cloned())
    };

    rsx! {
        div { id: "preview-container", class: "ad-preview-container",
            for image in images {
                img {
                    key: "{image.position}",
                    class: "ad-preview-image",
                    "data-position": "{image.position}",
                    src: "{image.src}",
                    alt: "{image.alt}",
                }
            }
            if let Some(preview) = video {
                video {
                    key: "{preview.object_url}",
                    class: "ad-preview-video",
                    title: "{preview.name}",
                    src: "{preview.object_url}",
                    controls: true,
                }
            }
        }
    }
}
