use super::use_controller;
use dioxus::prelude::*;

/// Dismissible banner for the current notice, if any.
#[component]
pub fn NoticeBanner() -> Element {
    let mut controller = use_controller();
    let notice = controller.read().notice();

    rsx! {
        if let Some(notice) = notice {
            div { class: "ad-notice", role: "alert",
                span { class: "ad-notice-text", "{notice.message()}" }
                button {
                    r#type: "button",
                    class: "ad-notice-dismiss",
                    onclick: move |_| controller.write().dismiss_notice(),
                    "Dismiss"
                }
            }
        }
    }
}
