//! CLI module for YtClip
//!
//! Every flag is optional. Without flags the tool is purely interactive.

use clap::Parser;

pub mod args;

pub use args::OverrideArgs;

/// YtClip interactive video clipper
///
/// Downloads a video with yt-dlp or picks one from the temp folder, asks for
/// a start and end time, and cuts the clip with ffmpeg.
#[derive(Parser, Debug, Default)]
#[command(name = "ytclip")]
#[command(about = "YtClip - Download a video and cut a clip, interactively")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: OverrideArgs,
}
