//! YtClip Interactive Video Clipper
//!
//! Downloads a video with yt-dlp, or picks one from the `temp` folder, then
//! asks for a start and end time and cuts the clip into `output` with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! ytclip
//! ytclip --output-dir clips --log-level debug
//! ```
//!
//! Exit codes: 0 when the clip was written, 2 when the session was ended by
//! an invalid answer, 1 on any other failure.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ytclip_cli::cli::Cli;
use ytclip_cli::config_initialization::{initialize_configuration, invocation_dir, log_configuration};
use ytclip_cli::{AppContainer, DefaultAppContainer};

/// Main entry point for the YtClip CLI application
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = initialize_configuration(&cli, &invocation_dir())
        .context("Failed to load configuration")?;
    config.logging.initialize()?;
    log_configuration(&config);

    info!("Starting YtClip");
    let container = DefaultAppContainer::new(&config);

    match container.clip_wizard().run().await {
        Ok(session) => {
            info!(?session, "YtClip completed successfully");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => Ok(ExitCode::from(e.exit_code())),
    }
}
