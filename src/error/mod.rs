//! Error handling module for YtClip

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for YtClip operations
#[derive(Error, Debug)]
pub enum YtClipError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Config file is not valid TOML
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Wizard step failed
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for YtClip operations
pub type YtClipResult<T> = std::result::Result<T, YtClipError>;
