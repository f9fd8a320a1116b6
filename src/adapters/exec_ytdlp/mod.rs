//! yt-dlp execution adapter
//!
//! Title lookup and downloads through the external `yt-dlp` tool. The URL is
//! always passed as its own argument after `--`, never through a shell.

use std::ffi::OsString;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::Command;
use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::ports::*;
use crate::utils::progress::parse_percentage;
use crate::utils::exit_failure;

/// Lines of stderr kept for error messages
const STDERR_TAIL_LINES: usize = 5;

/// yt-dlp based download adapter
pub struct YtDlpAdapter {
    program: String,
    format: String,
}

impl YtDlpAdapter {
    /// Create new yt-dlp adapter
    pub fn new(program: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            format: format.into(),
        }
    }

    /// Arguments for a title-only lookup
    pub fn title_args(url: &str) -> Vec<OsString> {
        vec!["--get-title".into(), "--".into(), url.into()]
    }

    /// Arguments for a download with newline-delimited progress
    pub fn download_args(&self, job: &DownloadJob) -> Vec<OsString> {
        vec![
            "-f".into(),
            self.format.as_str().into(),
            "-o".into(),
            job.destination.clone().into_os_string(),
            "--newline".into(),
            "--".into(),
            job.url.as_str().into(),
        ]
    }
}

impl Default for YtDlpAdapter {
    fn default() -> Self {
        Self::new("yt-dlp", "mp4")
    }
}

/// Feed every `NN.NN%` figure in `output` to `on_progress`, line by line
async fn forward_progress<R>(output: R, on_progress: ProgressFn<'_>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(output).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                if let Some(percent) = parse_percentage(&line) {
                    on_progress(percent);
                }
            }
            Ok(None) => break,
            Err(e) => {
                debug!("Stopped reading downloader output: {}", e);
                break;
            }
        }
    }
}

#[async_trait]
impl DownloadPort for YtDlpAdapter {
    async fn fetch_title(&self, url: &str) -> Result<String, DomainError> {
        let args = Self::title_args(url);
        debug!(program = %self.program, ?args, "Looking up video title");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                DomainError::TitleLookupFailed(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            return Err(DomainError::TitleLookupFailed(exit_failure(
                &self.program,
                &output.status,
                &String::from_utf8_lossy(&output.stderr),
                STDERR_TAIL_LINES,
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    async fn download(
        &self,
        job: &DownloadJob,
        on_progress: ProgressFn<'_>,
    ) -> Result<(), DomainError> {
        let args = self.download_args(job);
        debug!(program = %self.program, ?args, "Starting download");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::DownloadFailed(format!("failed to run {}: {}", self.program, e))
            })?;

        // Drained on its own task so a chatty stderr cannot stall the child
        let stderr_task = child.stderr.take().map(|mut stderr| {
            tokio::spawn(async move {
                let mut buf = Vec::new();
                let _ = stderr.read_to_end(&mut buf).await;
                String::from_utf8_lossy(&buf).into_owned()
            })
        });

        if let Some(stdout) = child.stdout.take() {
            forward_progress(stdout, on_progress).await;
        }

        let status = child.wait().await.map_err(|e| {
            DomainError::DownloadFailed(format!("failed to wait for {}: {}", self.program, e))
        })?;

        let stderr = match stderr_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };

        if !status.success() {
            info!(%status, "Download failed");
            return Err(DomainError::DownloadFailed(exit_failure(
                &self.program,
                &status,
                &stderr,
                STDERR_TAIL_LINES,
            )));
        }

        info!(destination = %job.destination.display(), "Download finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn job(url: &str) -> DownloadJob {
        DownloadJob {
            url: url.to_string(),
            destination: PathBuf::from("temp").join("clip.mp4"),
        }
    }

    #[test]
    fn test_title_args_end_options_before_url() {
        let args = YtDlpAdapter::title_args("-rm-rf");
        assert_eq!(args, vec![OsString::from("--get-title"), "--".into(), "-rm-rf".into()]);
    }

    #[test]
    fn test_download_args() {
        let adapter = YtDlpAdapter::default();
        let args = adapter.download_args(&job("https://example.com/watch?v=1&t=2"));
        let expected: Vec<OsString> = vec![
            "-f".into(),
            "mp4".into(),
            "-o".into(),
            PathBuf::from("temp").join("clip.mp4").into_os_string(),
            "--newline".into(),
            "--".into(),
            "https://example.com/watch?v=1&t=2".into(),
        ];
        assert_eq!(args, expected);
    }

    #[tokio::test]
    async fn test_missing_program_fails_title_lookup() {
        let adapter = YtDlpAdapter::new("ytclip-no-such-downloader", "mp4");
        let err = adapter.fetch_title("https://example.com").await.unwrap_err();
        assert!(matches!(err, DomainError::TitleLookupFailed(_)));
    }

    #[tokio::test]
    async fn test_missing_program_fails_download() {
        let adapter = YtDlpAdapter::new("ytclip-no-such-downloader", "mp4");
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: f32| seen.lock().unwrap().push(p);
        let err = adapter
            .download(&job("https://example.com"), &on_progress)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DownloadFailed(_)));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_download_failed() {
        let adapter = YtDlpAdapter::new("false", "mp4");
        let on_progress = |_: f32| {};
        let err = adapter
            .download(&job("https://example.com"), &on_progress)
            .await
            .unwrap_err();
        match err {
            DomainError::DownloadFailed(msg) => {
                assert!(msg.contains("exited with"), "{}", msg);
                assert!(!msg.ends_with(": "), "{}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_forward_progress_reads_every_line() {
        let output: &[u8] = b"[youtube] abc: Downloading webpage\n[download]  12.5% of 1MiB\n[download]  99.9% of 1MiB\n[download] 100% of 1MiB";
        let seen = Mutex::new(Vec::new());
        let on_progress = |p: f32| seen.lock().unwrap().push(p);
        forward_progress(output, &on_progress).await;
        assert_eq!(*seen.lock().unwrap(), vec![12.5, 99.9]);
    }
}
