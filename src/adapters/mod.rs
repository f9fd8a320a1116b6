// Adapters - External system implementations

pub mod exec_ffmpeg;
pub mod exec_ytdlp;
pub mod fs_local;
pub mod system_clock;
pub mod terminal_console;
pub mod toml_config;

// Re-export adapters
pub use exec_ffmpeg::FFmpegCutAdapter;
pub use exec_ytdlp::YtDlpAdapter;
pub use fs_local::LocalFsAdapter;
pub use system_clock::{FixedClockAdapter, SystemClockAdapter};
pub use terminal_console::TerminalConsoleAdapter;
pub use toml_config::TomlConfigAdapter;
