//! Loading, validating and submitting files from disk.

use aerodetect_core::backend::PredictionBackend;
use aerodetect_core::dispatch::{dispatch, PredictionRequest, SubmissionOutcome};
use aerodetect_core::media::{is_known_media_extension, mime_for_path, SelectedFile};
use aerodetect_core::selection::{validate, Rejection};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Reads every path into memory, typing each file by its extension.
pub async fn load_files(paths: &[PathBuf]) -> Result<Vec<SelectedFile>> {
    let mut files = Vec::with_capacity(paths.len());

    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        let known = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(is_known_media_extension);
        if !known {
            warn!("{} is not a recognized image or video type", name);
        }

        files.push(SelectedFile::new(name, mime_for_path(path), bytes));
    }

    Ok(files)
}

/// Applies the selection rules and builds the request to send.
pub fn prepare(files: Vec<SelectedFile>) -> Result<PredictionRequest, Rejection> {
    let selection = validate(files)?;
    Ok(PredictionRequest::from_selection(&selection))
}

/// Sends the request and reports how long the round-trip took.
pub async fn run<B>(backend: &B, request: &PredictionRequest) -> SubmissionOutcome
where
    B: PredictionBackend + ?Sized,
{
    let start = Instant::now();
    let outcome = dispatch(backend, request).await;
    info!(
        "Prediction finished in {:.1}s (success: {})",
        start.elapsed().as_secs_f64(),
        outcome.is_success()
    );
    outcome
}
