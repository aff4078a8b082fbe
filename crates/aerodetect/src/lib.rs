//! AeroDetect - drone detection upload page.
//!
//! A Dioxus front end for the prediction service. The user picks up to eight
//! images or a single video; the selection is previewed locally, posted to
//! the service, and the annotated results replace the previews in place.
//!
//! # Architecture
//!
//! - **Workflow**: [`aerodetect_core`] owns selection policy, previews, the
//!   wire protocol and the page controller
//! - **Components**: render the controller and forward DOM events to it
//! - **Platform**: object URLs, media playback and page origin on the web;
//!   data URLs and an environment-configured server on desktop
//!
//! # Platform Support
//!
//! - **Web (WASM)**: requests go through the browser's `fetch()`
//! - **Desktop**: same UI in a webview, requests through hyper + rustls

// Enforce memory safety: forbid all unsafe code
#![forbid(unsafe_code)]

pub mod components;
pub mod error;
pub mod platform;
pub mod utils;
