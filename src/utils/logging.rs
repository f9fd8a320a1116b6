//! Logging setup and output formatting

use tracing_subscriber::EnvFilter;

use crate::error::{YtClipError, YtClipResult};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for structured logging
    Json,
}

impl LogFormat {
    /// Parse log format from string
    pub fn parse(value: &str) -> YtClipResult<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(YtClipError::Config {
                message: format!("Invalid log format: {}. Valid formats: text, json", other),
            }),
        }
    }
}

/// Logging configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Build the filter, `RUST_LOG` taking precedence over the configured level
    pub fn env_filter(&self) -> YtClipResult<EnvFilter> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        EnvFilter::try_new(&self.level).map_err(|e| YtClipError::Config {
            message: format!("Invalid log level '{}': {}", self.level, e),
        })
    }

    /// Install the global subscriber
    ///
    /// Logs go to stderr; stdout belongs to the interactive prompts.
    pub fn initialize(&self) -> YtClipResult<()> {
        let filter = self.env_filter()?;
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false);

        let result = match self.format {
            LogFormat::Text => builder.try_init(),
            LogFormat::Json => builder.json().try_init(),
        };

        result.map_err(|e| YtClipError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Text ").unwrap(), LogFormat::Text);
        assert!(LogFormat::parse("yaml").is_err());
    }

    #[test]
    fn test_default_level_is_quiet() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, "warn");
        assert_eq!(config.format, LogFormat::Text);
    }
}
