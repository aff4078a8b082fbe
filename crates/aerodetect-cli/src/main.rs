//! AeroDetect CLI - submit images or a video to the prediction service.
//!
//! # Usage
//!
//! ```bash
//! # Detect drones in up to eight images, saving annotated results
//! aerodetect photo1.jpg photo2.png --output results/
//!
//! # Process a single video against a remote server
//! aerodetect clip.mp4 --server https://detect.example.com
//!
//! # Machine-readable report
//! aerodetect *.jpg --json
//! ```

mod config;
mod output;
mod submit;

use aerodetect_core::backend::HttpBackend;
use aerodetect_core::config::{DEFAULT_SERVER_URL, SERVER_URL_ENV};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// AeroDetect drone detection CLI.
///
/// Sends up to 8 images, or exactly one video, to the prediction service.
/// The same selection rules as the web page apply.
#[derive(Parser)]
#[command(name = "aerodetect", version, about)]
struct Cli {
    /// Image or video files to submit
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Prediction server base URL
    #[arg(long, env = SERVER_URL_ENV, default_value = DEFAULT_SERVER_URL)]
    server: String,

    /// Directory to write annotated result images into
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output a JSON report
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let server = config::resolve_server_url(&cli.server)?;
    let files = submit::load_files(&cli.files).await?;

    let request = match submit::prepare(files) {
        Ok(request) => request,
        Err(rejection) => {
            eprintln!("{}", rejection);
            std::process::exit(1);
        }
    };

    let backend = HttpBackend::new(server.as_str())?;
    let outcome = submit::run(&backend, &request).await;

    let saved = match &cli.output {
        Some(dir) => output::save_results(dir, &request, &outcome).await?,
        None => Vec::new(),
    };

    let report = output::Report::new(&server, &request, &outcome, saved);
    let rendered = if cli.json {
        output::format_json(&report)
    } else {
        output::format_human(&report)
    };
    println!("{}", rendered);

    if !outcome.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
