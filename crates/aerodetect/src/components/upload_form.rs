use super::{release_retired_urls, use_backend, use_controller};
use crate::error::UploadError;
use crate::platform;
use crate::utils::selection_summary;
use aerodetect_core::config::{messages, PICKER_ACCEPT};
use aerodetect_core::controller::{PreviewPlan, PreviewWork, UploadController};
use aerodetect_core::dispatch::{dispatch, SubmissionOutcome};
use aerodetect_core::error::{MediaError, PredictionError};
use aerodetect_core::media::SelectedFile;
use aerodetect_core::preview::{render_image_preview, VideoPreview};
use dioxus::logger::tracing::{error, warn};
use dioxus::prelude::*;

const FILE_INPUT_ID: &str = "file-input";

/// File picker and submit button.
///
/// Changing the picker resets the page at once; the files are then read into
/// memory, validated and previewed. Submitting sends the current selection.
#[component]
pub fn UploadForm() -> Element {
    let mut controller = use_controller();
    let backend = use_backend();

    // Rejections bump the picker generation; clear the input so picking the
    // same files again fires a new change event
    let picker_generation = use_memo(move || controller.read().picker_generation());
    use_effect(move || {
        if picker_generation() > 0 {
            platform::clear_file_input(FILE_INPUT_ID);
        }
    });

    let handle_change = move |evt: FormEvent| {
        controller.write().reset_for_new_selection();
        release_retired_urls(controller);
        let ticket = controller.read().current_ticket();

        spawn(async move {
            let mut files = Vec::new();
            let mut unreadable = Vec::new();
            for file in evt.files() {
                let name = file.name();
                let mime = file.content_type().unwrap_or_default();
                match file.read_bytes().await {
                    Ok(bytes) => files.push(SelectedFile::new(name, mime, bytes)),
                    Err(e) => {
                        let err = UploadError::FileRead {
                            name: name.clone(),
                            message: e.to_string(),
                        };
                        error!("{}", err);
                        unreadable.push(name);
                    }
                }
            }

            // Superseded by a newer change while reading
            if controller.read().current_ticket() != ticket {
                warn!("Discarding {} file(s) from a superseded selection", files.len());
                return;
            }

            // One unreadable file rejects the whole batch
            if !unreadable.is_empty() {
                controller.write().reject_unreadable(ticket, &unreadable);
                release_retired_urls(controller);
                return;
            }

            let plan = controller.write().select(files);
            release_retired_urls(controller);
            if let Ok(plan) = plan {
                start_previews(controller, plan);
            }
        });
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let Some(submission) = controller.write().begin_submission() else {
            return;
        };
        let backend = backend.clone();

        spawn(async move {
            let outcome = match &backend {
                Ok(backend) => dispatch(backend, &submission.request).await,
                Err(e) => {
                    error!("Cannot submit: {}", e);
                    SubmissionOutcome::Failed(PredictionError::Unavailable(e.to_string()))
                }
            };
            controller
                .write()
                .complete_submission(submission.ticket, outcome);
            release_retired_urls(controller);
        });
    };

    let generation = picker_generation();
    let (busy, limit_visible, summary) = {
        let state = controller.read();
        (
            state.indicator().is_active(),
            state.limit_message_visible(),
            state
                .selection()
                .filter(|s| !s.is_empty())
                .map(selection_summary),
        )
    };

    rsx! {
        form { id: "upload-form", class: "ad-upload-form", onsubmit: handle_submit,
            label { class: "ad-picker-label", r#for: FILE_INPUT_ID, "Choose images or a video" }
            input {
                key: "{generation}",
                id: FILE_INPUT_ID,
                r#type: "file",
                name: "files",
                class: "ad-file-input",
                multiple: true,
                accept: PICKER_ACCEPT,
                onchange: handle_change,
            }
            if limit_visible {
                p { id: "file-limit-msg", class: "ad-limit-msg", "{messages::TOO_MANY_IMAGES}" }
            }
            if let Some(summary) = summary {
                p { class: "ad-selection-summary", "{summary}" }
            }
            button {
                r#type: "submit",
                class: "ad-submit",
                disabled: busy,
                if busy { "Detecting..." } else { "Detect" }
            }
        }
    }
}

/// Kicks off the preview work for an accepted selection.
fn start_previews(mut controller: Signal<UploadController>, plan: PreviewPlan) {
    let ticket = plan.ticket;

    match plan.work {
        PreviewWork::Video(file) => match platform::create_object_url(&file) {
            Ok(object_url) => {
                controller.write().set_video_preview(
                    ticket,
                    VideoPreview {
                        object_url,
                        name: file.name,
                    },
                );
                release_retired_urls(controller);
            }
            // The video stays selected and can still be submitted
            Err(e) => warn!("Preview unavailable for {}: {}", file.name, e),
        },
        PreviewWork::Images(images) => {
            // Decodes finish in any order; positions keep results aligned
            for (position, file) in images {
                spawn(async move {
                    let decoded: Result<String, MediaError> =
                        platform::run_blocking(move || render_image_preview(&file)).await;
                    match decoded {
                        Ok(src) => {
                            controller.write().record_preview(ticket, position, src);
                        }
                        Err(e) => error!("Failed to preview image {}: {}", position + 1, e),
                    }
                });
            }
        }
    }
}
