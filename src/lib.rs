//! YtClip Interactive Video Clipper Library
//!
//! Downloads a video with an external downloader (or picks one already in the
//! temp folder), asks for a `mm:ss` start and end, and cuts the clip with an
//! external media tool in stream-copy mode.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{AppContainer, ClipWizard, DefaultAppContainer};
pub use config_initialization::{initialize_configuration, AppConfig};
pub use domain::errors::DomainError;
pub use domain::model::{Session, TimeRange, Timestamp, VideoSource};
pub use error::{YtClipError, YtClipResult};
