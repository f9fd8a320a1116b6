// Domain models - Core types and data structures

use std::fmt;
use std::path::PathBuf;

use crate::domain::errors::{DomainError, TimeFormatIssue};

/// Title used when the downloader cannot tell us one
pub const FALLBACK_TITLE: &str = "video-youtube";

/// Extension every clip and downloaded video carries
pub const VIDEO_EXTENSION: &str = ".mp4";

/// A validated `mm:ss` timestamp
///
/// Both fields are exactly two ASCII digits. Minutes and seconds are not
/// range-checked, so `99:99` is a valid timestamp worth 6039 seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamp {
    raw: String,
    total_seconds: u32,
}

impl Timestamp {
    /// Parse a trimmed line of input
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();

        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit() || c == ':') {
            return Err(DomainError::InvalidTimeFormat(
                TimeFormatIssue::IllegalCharacters,
            ));
        }

        let bytes = trimmed.as_bytes();
        let laid_out = bytes.len() == 5
            && bytes[2] == b':'
            && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());
        if !laid_out {
            return Err(DomainError::InvalidTimeFormat(
                TimeFormatIssue::NotMinutesSeconds,
            ));
        }

        let minutes = u32::from(bytes[0] - b'0') * 10 + u32::from(bytes[1] - b'0');
        let seconds = u32::from(bytes[3] - b'0') * 10 + u32::from(bytes[4] - b'0');

        Ok(Self {
            raw: trimmed.to_string(),
            total_seconds: minutes * 60 + seconds,
        })
    }

    /// The timestamp exactly as the user typed it
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `minutes * 60 + seconds`
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Offset handed to the cutter, `00:mm:ss`
    pub fn cutter_offset(&self) -> String {
        format!("00:{}", self.raw)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Convert a `mm:ss` string to seconds, `None` if it is not `mm:ss`
pub fn time_to_seconds(time: &str) -> Option<u32> {
    Timestamp::parse(time).ok().map(|t| t.total_seconds())
}

/// Start and end of a clip, end strictly after start
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl TimeRange {
    pub fn new(start: Timestamp, end: Timestamp) -> Result<Self, DomainError> {
        if end.total_seconds() <= start.total_seconds() {
            return Err(DomainError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Clip length in seconds
    pub fn duration_seconds(&self) -> u32 {
        self.end.total_seconds() - self.start.total_seconds()
    }
}

/// Where the source video comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VideoSource {
    /// Downloaded from a URL
    Remote,
    /// Already sitting in the temp folder
    Local,
}

/// Everything the wizard learns over one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub source: Option<VideoSource>,
    pub video_path: Option<PathBuf>,
    pub video_name: Option<String>,
    pub time_range: Option<TimeRange>,
    pub output_name: Option<String>,
    pub output_path: Option<PathBuf>,
    pub temp_deleted: bool,
}

/// One invocation of the cutter
#[derive(Debug, Clone, PartialEq)]
pub struct CutJob {
    pub source: PathBuf,
    pub range: TimeRange,
    pub destination: PathBuf,
}

/// One invocation of the downloader
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadJob {
    pub url: String,
    pub destination: PathBuf,
}

/// Replace every character outside `[a-zA-Z0-9-_]` with `_`
///
/// Runs character for character, so consecutive bad characters become
/// consecutive underscores. Leading and trailing whitespace is trimmed first.
pub fn sanitize_file_stem(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Tidy a title reported by the downloader
///
/// Keeps ASCII word characters, whitespace and `-`, drops everything else.
pub fn clean_title(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Strip a trailing `.mp4` from a file name
pub fn video_stem(file_name: &str) -> &str {
    file_name
        .strip_suffix(VIDEO_EXTENSION)
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests;
