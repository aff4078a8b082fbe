//! # AeroDetect Core
//!
//! Platform-independent upload workflow for the AeroDetect drone detection
//! client.
//!
//! This crate holds everything the web page and the CLI share: selection
//! policy, preview bookkeeping, the wire protocol of the prediction routes and
//! the controller that sequences a submission. Nothing here touches the DOM,
//! so the whole workflow runs under plain `cargo test`.
//!
//! ## Modules
//!
//! - [`config`] - Limits, routes, field names and user-facing messages
//! - [`error`] - Error types for prediction requests and media decoding
//! - [`media`] - Selected files, MIME classification and data URLs
//! - [`selection`] - Image/video selection policy
//! - [`preview`] - Preview container contents and result mapping
//! - [`indicator`] - Loading bar state
//! - [`protocol`] - Reply interpretation and URL resolution
//! - [`backend`] - Prediction transport trait and HTTP implementation
//! - [`dispatch`] - One selection, one request, one outcome
//! - [`controller`] - Page state and its transitions

pub mod backend;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod indicator;
pub mod media;
pub mod preview;
pub mod protocol;
pub mod selection;

#[cfg(test)]
mod test_utils;
