//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Settings that take precedence over the config file
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct OverrideArgs {
    /// Config file (default: ytclip.toml in the current directory, if present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Folder for downloaded and local source videos
    #[arg(long)]
    pub temp_dir: Option<PathBuf>,

    /// Folder for finished clips
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Downloader executable
    #[arg(long)]
    pub downloader: Option<String>,

    /// Cutter executable
    #[arg(long)]
    pub cutter: Option<String>,

    /// Logging level or filter directive (RUST_LOG wins when set)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log output format: text or json
    #[arg(long)]
    pub log_format: Option<String>,
}
