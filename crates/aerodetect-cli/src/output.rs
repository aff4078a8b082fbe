//! Output formatting for prediction results.
//!
//! Supports both human-readable terminal output and JSON for scripting.
//! Result images can also be decoded and written to disk.

use crate::config::result_path;
use aerodetect_core::config::messages;
use aerodetect_core::dispatch::{PredictionRequest, SubmissionOutcome};
use aerodetect_core::media::{decode_data_url, extension_for_mime};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

/// A result image written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedResult {
    pub position: usize,
    pub path: PathBuf,
}

/// JSON output structure for one submission
#[derive(Debug, Serialize)]
pub struct Report {
    pub server: String,
    /// `images`, `video` or `unsupported`
    pub kind: &'static str,
    /// `ok`, `no_results`, `unsupported` or `failed`
    pub status: &'static str,
    pub message: Option<String>,
    pub video_url: Option<String>,
    pub results: Vec<ImageResult>,
}

/// Per-upload result in JSON format
#[derive(Debug, Serialize)]
pub struct ImageResult {
    pub position: usize,
    pub source: String,
    /// Whether the backend returned a usable image for this position
    pub received: bool,
    pub saved_to: Option<String>,
}

impl Report {
    pub fn new(
        server: &Url,
        request: &PredictionRequest,
        outcome: &SubmissionOutcome,
        saved: Vec<SavedResult>,
    ) -> Self {
        let kind = match request {
            PredictionRequest::Images(_) => "images",
            PredictionRequest::Video(_) => "video",
            PredictionRequest::Unsupported => "unsupported",
        };

        let (status, message) = match outcome {
            SubmissionOutcome::VideoReady { .. } | SubmissionOutcome::ImagesReady { .. } => {
                ("ok", None)
            }
            SubmissionOutcome::NoResults => ("no_results", Some(messages::NO_RESULT_IMAGES.to_string())),
            SubmissionOutcome::Unsupported => (
                "unsupported",
                Some(messages::UNSUPPORTED_FILE_TYPE.to_string()),
            ),
            SubmissionOutcome::Failed(e) => ("failed", Some(e.to_string())),
        };

        let video_url = match outcome {
            SubmissionOutcome::VideoReady { url } => Some(url.to_string()),
            _ => None,
        };

        let results = match (request, outcome) {
            (PredictionRequest::Images(images), SubmissionOutcome::ImagesReady { results }) => images
                .iter()
                .enumerate()
                .map(|(position, image)| ImageResult {
                    position,
                    source: image.name.clone(),
                    received: matches!(results.get(position), Some(Some(_))),
                    saved_to: saved
                        .iter()
                        .find(|s| s.position == position)
                        .map(|s| s.path.display().to_string()),
                })
                .collect(),
            _ => Vec::new(),
        };

        Self {
            server: server.to_string(),
            kind,
            status,
            message,
            video_url,
            results,
        }
    }
}

/// Decodes each result image and writes it next to its source name in `dir`.
///
/// Entries that are missing or fail to decode are skipped with a warning.
pub async fn save_results(
    dir: &Path,
    request: &PredictionRequest,
    outcome: &SubmissionOutcome,
) -> Result<Vec<SavedResult>> {
    let (PredictionRequest::Images(images), SubmissionOutcome::ImagesReady { results }) =
        (request, outcome)
    else {
        return Ok(Vec::new());
    };

    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let mut saved = Vec::new();
    for (position, result) in results.iter().enumerate() {
        let Some(data_url) = result else { continue };
        let Some(source) = images.get(position) else {
            warn!("Backend returned an extra result at position {}", position);
            continue;
        };

        let data = match decode_data_url(data_url) {
            Ok(data) => data,
            Err(e) => {
                warn!("Skipping result for {}: {}", source.name, e);
                continue;
            }
        };

        let path = result_path(dir, &source.name, extension_for_mime(&data.mime));
        tokio::fs::write(&path, &data.bytes)
            .await
            .with_context(|| format!("Failed to write {}", path.display()))?;
        saved.push(SavedResult { position, path });
    }

    Ok(saved)
}

/// Formats a report as JSON.
pub fn format_json(report: &Report) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
}

/// Formats a report for human-readable terminal output.
pub fn format_human(report: &Report) -> String {
    match report.status {
        "ok" => {}
        "failed" => {
            return format!(
                "{}\n   {}",
                messages::DETECTION_FAILED,
                report.message.as_deref().unwrap_or("unknown error")
            )
        }
        _ => return report.message.clone().unwrap_or_default(),
    }

    if let Some(url) = &report.video_url {
        return format!("Processed video: {}", url);
    }

    let received = report.results.iter().filter(|r| r.received).count();
    let mut output = format!(
        "Received {} result image{} for {} upload{}:\n",
        received,
        if received == 1 { "" } else { "s" },
        report.results.len(),
        if report.results.len() == 1 { "" } else { "s" },
    );

    for result in &report.results {
        let detail = match (&result.saved_to, result.received) {
            (Some(path), _) => format!("saved to {}", path),
            (None, true) => "received (use --output to save)".to_string(),
            (None, false) => "no result".to_string(),
        };
        output.push_str(&format!("{}. {} - {}\n", result.position + 1, result.source, detail));
    }

    output.trim_end().to_string()
}
