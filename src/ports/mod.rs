// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Progress sink for a running download, fed percentages in `0.0..=100.0`
pub type ProgressFn<'a> = &'a (dyn Fn(f32) + Send + Sync);

/// Port for the interactive terminal
///
/// Owns the single input handle for the lifetime of a wizard run.
#[async_trait]
pub trait ConsolePort: Send + Sync {
    /// Print `prompt` without a newline and read one line, newline stripped
    async fn ask(&self, prompt: &str) -> Result<String, DomainError>;

    /// Print a full line
    fn say(&self, message: &str);

    /// Overwrite the current line in place
    fn progress(&self, message: &str);

    /// Print a line to the error stream
    fn report_error(&self, message: &str);

    /// Release the input handle; later `ask` calls fail
    async fn close(&self);
}

/// Port for the external video downloader
#[async_trait]
pub trait DownloadPort: Send + Sync {
    /// Raw title of the video behind `url`
    async fn fetch_title(&self, url: &str) -> Result<String, DomainError>;

    /// Download into `job.destination`, reporting percentages as they stream in
    async fn download(&self, job: &DownloadJob, on_progress: ProgressFn<'_>)
        -> Result<(), DomainError>;
}

/// Port for the external media cutter
#[async_trait]
pub trait CutPort: Send + Sync {
    /// Stream-copy `job.range` of `job.source` into `job.destination`
    async fn cut(&self, job: &CutJob) -> Result<(), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Create directory (including parent directories)
    async fn create_directory(&self, dir: &Path) -> Result<(), DomainError>;

    /// Names of the regular files directly inside `dir`, sorted
    async fn list_files(&self, dir: &Path) -> Result<Vec<String>, DomainError>;

    /// Delete file
    async fn delete_file(&self, path: &Path) -> Result<(), DomainError>;
}

/// Port for the calendar
pub trait ClockPort: Send + Sync {
    /// Today's date in the local timezone
    fn today(&self) -> NaiveDate;
}

/// Working directories the wizard reads and writes
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDirs {
    pub temp: PathBuf,
    pub output: PathBuf,
}

impl Default for WorkDirs {
    fn default() -> Self {
        Self {
            temp: PathBuf::from("temp"),
            output: PathBuf::from("output"),
        }
    }
}
