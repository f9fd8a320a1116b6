//! FFmpeg execution adapter
//!
//! Cuts clips by running the external `ffmpeg` tool in stream-copy mode.
//! Cut points snap to keyframes; frame-exact trimming is not attempted.

use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::exit_failure;

/// Lines of ffmpeg's stderr carried into `CutFailed`
const STDERR_TAIL_LINES: usize = 8;

/// FFmpeg-based cut adapter
pub struct FFmpegCutAdapter {
    program: String,
}

impl FFmpegCutAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments for one overwrite-enabled stream-copy cut
    pub fn cut_args(job: &CutJob) -> Vec<OsString> {
        vec![
            "-y".into(),
            "-i".into(),
            job.source.clone().into_os_string(),
            "-ss".into(),
            job.range.start.cutter_offset().into(),
            "-to".into(),
            job.range.end.cutter_offset().into(),
            "-c".into(),
            "copy".into(),
            "-avoid_negative_ts".into(),
            "make_zero".into(),
            job.destination.clone().into_os_string(),
        ]
    }
}

impl Default for FFmpegCutAdapter {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

#[async_trait]
impl CutPort for FFmpegCutAdapter {
    async fn cut(&self, job: &CutJob) -> Result<(), DomainError> {
        let args = Self::cut_args(job);
        debug!(program = %self.program, ?args, "Starting cut");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| DomainError::CutFailed(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            info!(status = %output.status, "Cut failed");
            return Err(DomainError::CutFailed(exit_failure(
                &self.program,
                &output.status,
                &String::from_utf8_lossy(&output.stderr),
                STDERR_TAIL_LINES,
            )));
        }

        info!(
            destination = %job.destination.display(),
            seconds = job.range.duration_seconds(),
            "Cut finished"
        );
        Ok(())
    }
}
