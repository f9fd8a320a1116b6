// TOML config adapter - Optional settings file

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{YtClipError, YtClipResult};

/// File looked up in the invocation directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "ytclip.toml";

/// Settings read from the `[ytclip]` table; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub temp_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub downloader: Option<String>,
    pub cutter: Option<String>,
    pub download_format: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    ytclip: FileSettings,
}

/// TOML configuration adapter
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Parse settings from TOML text
    pub fn parse(content: &str, origin: &Path) -> YtClipResult<FileSettings> {
        let document: ConfigDocument =
            toml::from_str(content).map_err(|source| YtClipError::ConfigParse {
                path: origin.display().to_string(),
                source,
            })?;
        Ok(document.ytclip)
    }

    /// Load an explicitly requested file; it must exist
    pub fn load(path: &Path) -> YtClipResult<FileSettings> {
        let content = std::fs::read_to_string(path).map_err(|e| YtClipError::Config {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Self::parse(&content, path)
    }

    /// Load `ytclip.toml` from `dir` if present
    pub fn load_optional(dir: &Path) -> YtClipResult<Option<FileSettings>> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if !path.is_file() {
            return Ok(None);
        }
        Self::load(&path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_table() {
        let content = r#"
[ytclip]
temp_dir = "scratch"
output_dir = "clips"
downloader = "/opt/bin/yt-dlp"
cutter = "ffmpeg7"
download_format = "best[ext=mp4]"
log_level = "debug"
log_format = "json"
"#;
        let settings = TomlConfigAdapter::parse(content, Path::new("ytclip.toml")).unwrap();
        assert_eq!(settings.temp_dir, Some(PathBuf::from("scratch")));
        assert_eq!(settings.output_dir, Some(PathBuf::from("clips")));
        assert_eq!(settings.downloader.as_deref(), Some("/opt/bin/yt-dlp"));
        assert_eq!(settings.cutter.as_deref(), Some("ffmpeg7"));
        assert_eq!(settings.download_format.as_deref(), Some("best[ext=mp4]"));
        assert_eq!(settings.log_level.as_deref(), Some("debug"));
        assert_eq!(settings.log_format.as_deref(), Some("json"));
    }

    #[test]
    fn test_parse_empty_document() {
        let settings = TomlConfigAdapter::parse("", Path::new("ytclip.toml")).unwrap();
        assert_eq!(settings, FileSettings::default());
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = TomlConfigAdapter::parse("[ytclip]\nthreads = 4\n", Path::new("x.toml"))
            .unwrap_err();
        assert!(matches!(err, YtClipError::ConfigParse { .. }));
    }

    #[test]
    fn test_load_optional_without_file() {
        let dir = TempDir::new().unwrap();
        assert!(TomlConfigAdapter::load_optional(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_optional_with_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[ytclip]\ncutter = \"avconv\"\n")
            .unwrap();
        let settings = TomlConfigAdapter::load_optional(dir.path()).unwrap().unwrap();
        assert_eq!(settings.cutter.as_deref(), Some("avconv"));
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = TomlConfigAdapter::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, YtClipError::Config { .. }));
    }
}
