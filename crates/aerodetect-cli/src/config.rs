//! Server and output path resolution for the CLI.
//!
//! The server URL comes from `--server`, then `$AERODETECT_SERVER_URL`, then
//! the local development default (clap applies that order).

use anyhow::{anyhow, bail, Context, Result};
use std::path::{Path, PathBuf};
use url::Url;

/// Suffix appended to a source file stem for its annotated result.
const RESULT_SUFFIX: &str = "_result";

/// Parses and checks the prediction server URL.
pub fn resolve_server_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).with_context(|| format!("Invalid server URL: {}", raw))?;

    match url.scheme() {
        "http" | "https" => {}
        other => bail!("Unsupported server scheme: {} (only http/https allowed)", other),
    }

    if url.host_str().is_none() {
        return Err(anyhow!("Server URL has no host: {}", raw));
    }

    Ok(url)
}

/// Path a result for `source` is written to inside `dir`.
///
/// `photo.jpg` with a PNG result becomes `<dir>/photo_result.png`.
pub fn result_path(dir: &Path, source: &str, extension: &str) -> PathBuf {
    let stem = Path::new(source)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("image");
    dir.join(format!("{}{}.{}", stem, RESULT_SUFFIX, extension))
}
