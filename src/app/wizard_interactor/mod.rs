// Wizard interactor - Orchestrates one interactive clipping session

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::ports::*;
use crate::utils::progress::format_progress;

/// Interactor for the download-and-clip wizard
///
/// Steps run strictly in order: setup, source choice, acquire, time range,
/// output naming, cut, cleanup. Only the time prompts retry; every other bad
/// answer ends the session.
pub struct ClipWizard {
    console: Arc<dyn ConsolePort>,
    downloader: Arc<dyn DownloadPort>,
    cutter: Arc<dyn CutPort>,
    fs_port: Arc<dyn FsPort>,
    clock: Arc<dyn ClockPort>,
    dirs: WorkDirs,
}

impl ClipWizard {
    /// Create new wizard with injected ports
    pub fn new(
        console: Arc<dyn ConsolePort>,
        downloader: Arc<dyn DownloadPort>,
        cutter: Arc<dyn CutPort>,
        fs_port: Arc<dyn FsPort>,
        clock: Arc<dyn ClockPort>,
        dirs: WorkDirs,
    ) -> Self {
        Self {
            console,
            downloader,
            cutter,
            fs_port,
            clock,
            dirs,
        }
    }

    /// Run the whole session
    ///
    /// Errors are reported to the user here. The console is closed on every
    /// path before returning.
    pub async fn run(&self) -> Result<Session, DomainError> {
        let mut session = Session::default();
        let result = self.run_steps(&mut session).await;

        if let Err(e) = &result {
            if e.is_abort() {
                info!("Session ended: {}", e);
                self.console.say(&format!("❌ {}", e));
            } else {
                info!("Session failed: {}", e);
                self.console.report_error(&format!("\n❌ ERROR: {}", e));
            }
        }

        self.console.close().await;
        result.map(|_| session)
    }

    async fn run_steps(&self, session: &mut Session) -> Result<(), DomainError> {
        self.setup().await?;

        let source = self.select_source().await?;
        session.source = Some(source);

        let (video_path, video_name) = match source {
            VideoSource::Remote => self.acquire_remote().await?,
            VideoSource::Local => self.acquire_local().await?,
        };
        session.video_path = Some(video_path.clone());
        session.video_name = Some(video_name);

        let start = self.ask_time("Start").await?;
        let end = self.ask_time("End").await?;
        let range = TimeRange::new(start, end)?;
        session.time_range = Some(range.clone());

        let output_name = self.choose_output_name().await?;
        let output_path = self.dirs.output.join(&output_name);
        session.output_name = Some(output_name);
        session.output_path = Some(output_path.clone());

        self.console.say("\n✂️ Cutting video...");
        let job = CutJob {
            source: video_path.clone(),
            range,
            destination: output_path.clone(),
        };
        self.cutter.cut(&job).await?;
        self.console
            .say(&format!("✔ Cut finished → {}", output_path.display()));

        session.temp_deleted = self.cleanup(&video_path).await?;

        self.console.say("\n✅ DONE!");
        info!(output = %output_path.display(), "Session complete");
        Ok(())
    }

    async fn setup(&self) -> Result<(), DomainError> {
        self.fs_port.create_directory(&self.dirs.temp).await?;
        self.fs_port.create_directory(&self.dirs.output).await
    }

    async fn select_source(&self) -> Result<VideoSource, DomainError> {
        self.console.say("\n🎬 YTCLIP\n");
        self.console.say("1. Download from a URL");
        self.console
            .say(&format!("2. Local video ({} folder)", self.dirs.temp.display()));

        let answer = self.console.ask("Choose (1/2): ").await?;
        MenuChoice::parse_source(&answer)
    }

    async fn acquire_remote(&self) -> Result<(PathBuf, String), DomainError> {
        let url = self.console.ask("\n🔗 Video URL: ").await?.trim().to_string();
        let title = self.suggest_title(&url).await;

        self.console.say(&format!("📌 Detected title: {}", title));
        let custom = self
            .console
            .ask("✏️ Use this title? (enter = yes / type another name): ")
            .await?;

        let chosen = if custom.trim().is_empty() {
            title
        } else {
            custom
        };
        let mut name = sanitize_file_stem(&chosen);
        if name.is_empty() {
            name = FALLBACK_TITLE.to_string();
        }

        let destination = self.dirs.temp.join(format!("{}{}", name, VIDEO_EXTENSION));
        let job = DownloadJob {
            url,
            destination: destination.clone(),
        };

        let console = Arc::clone(&self.console);
        let on_progress = move |percent: f32| console.progress(&format_progress(percent));
        self.downloader.download(&job, &on_progress).await?;

        self.console.progress(&format_progress(100.0));
        self.console.say("");
        self.console.say("✔ Download finished\n");

        Ok((destination, name))
    }

    /// Title from the downloader, or the fallback on any failure
    async fn suggest_title(&self, url: &str) -> String {
        match self.downloader.fetch_title(url).await {
            Ok(raw) => {
                let title = clean_title(&raw);
                if title.is_empty() {
                    FALLBACK_TITLE.to_string()
                } else {
                    title
                }
            }
            Err(e) => {
                debug!("Using fallback title: {}", e);
                FALLBACK_TITLE.to_string()
            }
        }
    }

    async fn acquire_local(&self) -> Result<(PathBuf, String), DomainError> {
        let videos: Vec<String> = self
            .fs_port
            .list_files(&self.dirs.temp)
            .await?
            .into_iter()
            .filter(|name| name.ends_with(VIDEO_EXTENSION))
            .collect();

        if videos.is_empty() {
            return Err(DomainError::EmptyTempFolder(
                self.dirs.temp.display().to_string(),
            ));
        }

        self.console.say("\n📁 Available videos:");
        for (i, name) in videos.iter().enumerate() {
            self.console.say(&format!("{}. {}", i + 1, name));
        }

        let answer = self.console.ask("Choose a video number: ").await?;
        let index = MenuChoice::parse_index(&answer, videos.len())?;
        let file_name = &videos[index];

        Ok((
            self.dirs.temp.join(file_name),
            video_stem(file_name).to_string(),
        ))
    }

    /// Ask until the answer is a valid `mm:ss`
    async fn ask_time(&self, label: &str) -> Result<Timestamp, DomainError> {
        let prompt = format!("⏱️ {} (mm:ss): ", label);
        loop {
            let answer = self.console.ask(&prompt).await?;
            match Timestamp::parse(&answer) {
                Ok(time) => return Ok(time),
                Err(e @ DomainError::InvalidTimeFormat(_)) => {
                    self.console.say(&format!("⚠️ {}", e));
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Typed name, or the next free auto name based on the pre-cut listing
    async fn choose_output_name(&self) -> Result<String, DomainError> {
        let answer = self
            .console
            .ask("\n💾 Output file name (enter = automatic): ")
            .await?;

        match OutputNamePolicy::normalize(&answer) {
            Some(name) => Ok(name),
            None => {
                let existing = self.fs_port.list_files(&self.dirs.output).await?;
                Ok(ClipNamer::next_name(&existing, self.clock.today()))
            }
        }
    }

    /// Returns whether the temp video was deleted
    async fn cleanup(&self, video_path: &Path) -> Result<bool, DomainError> {
        let answer = self.console.ask("\n🧹 Delete temp video? (y/n): ").await?;
        if CleanupDecision::wants_delete(&answer) {
            self.fs_port.delete_file(video_path).await?;
            self.console.say("🗑️ Temp video deleted");
            Ok(true)
        } else {
            self.console.say("📦 Temp video kept");
            Ok(false)
        }
    }
}
