use super::use_controller;
use crate::platform;
use dioxus::prelude::*;

const OUTPUT_VIDEO_ID: &str = "output-video";

/// Player for the processed video, hidden until a result arrives.
#[component]
pub fn VideoOutput() -> Element {
    let controller = use_controller();
    let playback = use_memo(move || controller.read().video_output().playback);

    // Runs after the new source is in the DOM
    use_effect(move || {
        if playback() > 0 {
            platform::play_video(OUTPUT_VIDEO_ID);
        }
    });

    let output = controller.read().video_output().clone();
    let round = playback();

    rsx! {
        div { class: "ad-output", hidden: !output.visible,
            if let Some(src) = output.src {
                video {
                    key: "{round}",
                    id: OUTPUT_VIDEO_ID,
                    class: "ad-output-video",
                    src: "{src}",
                    controls: true,
                    autoplay: true,
                }
            }
        }
    }
}
