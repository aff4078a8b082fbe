use super::use_controller;
use dioxus::prelude::*;

/// Thin bar across the top of the page while a request is in flight.
#[component]
pub fn LoadingBar() -> Element {
    let controller = use_controller();
    let indicator = controller.read().indicator();
    let style = indicator.style();

    rsx! {
        div {
            id: "loading-bar",
            class: "ad-loading-bar",
            role: "progressbar",
            "aria-busy": "{indicator.is_active()}",
            style: "{style}",
        }
    }
}
