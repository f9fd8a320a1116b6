//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use tracing::info;

use crate::adapters::toml_config::{FileSettings, TomlConfigAdapter};
use crate::cli::Cli;
use crate::error::YtClipResult;
use crate::ports::WorkDirs;
use crate::utils::logging::{LogFormat, LoggingConfig};

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub dirs: WorkDirs,
    pub downloader: String,
    pub cutter: String,
    pub download_format: String,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dirs: WorkDirs::default(),
            downloader: "yt-dlp".to_string(),
            cutter: "ffmpeg".to_string(),
            download_format: "mp4".to_string(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Layer file settings over the current values
    fn apply_file(&mut self, file: FileSettings) -> YtClipResult<()> {
        if let Some(dir) = file.temp_dir {
            self.dirs.temp = dir;
        }
        if let Some(dir) = file.output_dir {
            self.dirs.output = dir;
        }
        if let Some(program) = file.downloader {
            self.downloader = program;
        }
        if let Some(program) = file.cutter {
            self.cutter = program;
        }
        if let Some(format) = file.download_format {
            self.download_format = format;
        }
        if let Some(level) = file.log_level {
            self.logging.level = level;
        }
        if let Some(format) = file.log_format {
            self.logging.format = LogFormat::parse(&format)?;
        }
        Ok(())
    }

    /// Layer CLI flags over the current values
    fn apply_cli(&mut self, cli: &Cli) -> YtClipResult<()> {
        let args = &cli.overrides;
        if let Some(dir) = &args.temp_dir {
            self.dirs.temp = dir.clone();
        }
        if let Some(dir) = &args.output_dir {
            self.dirs.output = dir.clone();
        }
        if let Some(program) = &args.downloader {
            self.downloader = program.clone();
        }
        if let Some(program) = &args.cutter {
            self.cutter = program.clone();
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
        if let Some(format) = &args.log_format {
            self.logging.format = LogFormat::parse(format)?;
        }
        Ok(())
    }
}

/// Resolve configuration with precedence CLI > file > defaults
///
/// `base_dir` is where `ytclip.toml` is looked for when `--config` is absent.
/// Runs before logging is installed, so nothing is logged from here.
pub fn initialize_configuration(cli: &Cli, base_dir: &Path) -> YtClipResult<AppConfig> {
    let mut config = AppConfig::default();

    let file = match &cli.overrides.config {
        Some(path) => Some(TomlConfigAdapter::load(path)?),
        None => TomlConfigAdapter::load_optional(base_dir)?,
    };
    if let Some(file) = file {
        config.apply_file(file)?;
    }

    config.apply_cli(cli)?;
    Ok(config)
}

/// Log the resolved configuration once logging is up
pub fn log_configuration(config: &AppConfig) {
    info!(
        temp_dir = %config.dirs.temp.display(),
        output_dir = %config.dirs.output.display(),
        downloader = %config.downloader,
        cutter = %config.cutter,
        "Configuration resolved"
    );
}

/// Directory the process was started from, falling back to `.`
pub fn invocation_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
