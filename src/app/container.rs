use std::sync::Arc;

use crate::adapters::{
    FFmpegCutAdapter, LocalFsAdapter, SystemClockAdapter, TerminalConsoleAdapter, YtDlpAdapter,
};
use crate::app::wizard_interactor::ClipWizard;
use crate::config_initialization::AppConfig;
use crate::ports::{ClockPort, ConsolePort, CutPort, DownloadPort, FsPort};

pub trait AppContainer: Send + Sync {
    fn clip_wizard(&self) -> Arc<ClipWizard>;
}

pub struct DefaultAppContainer {
    clip_wizard: Arc<ClipWizard>,
}

impl DefaultAppContainer {
    pub fn new(config: &AppConfig) -> Self {
        let console = Arc::new(TerminalConsoleAdapter::new());
        let downloader = Arc::new(YtDlpAdapter::new(
            config.downloader.clone(),
            config.download_format.clone(),
        ));
        let cutter = Arc::new(FFmpegCutAdapter::new(config.cutter.clone()));
        let fs_port = Arc::new(LocalFsAdapter::new());
        let clock = Arc::new(SystemClockAdapter);

        let clip_wizard = Arc::new(ClipWizard::new(
            console as Arc<dyn ConsolePort>,
            downloader as Arc<dyn DownloadPort>,
            cutter as Arc<dyn CutPort>,
            fs_port as Arc<dyn FsPort>,
            clock as Arc<dyn ClockPort>,
            config.dirs.clone(),
        ));

        Self { clip_wizard }
    }
}

impl AppContainer for DefaultAppContainer {
    fn clip_wizard(&self) -> Arc<ClipWizard> {
        Arc::clone(&self.clip_wizard)
    }
}
