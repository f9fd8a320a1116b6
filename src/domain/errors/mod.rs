// Domain errors - Error types for the domain layer

use std::fmt;

/// Why a line of input was rejected as a `mm:ss` timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeFormatIssue {
    /// Something other than digits and ':' was typed
    IllegalCharacters,
    /// Only digits and ':' but not laid out as `mm:ss`
    NotMinutesSeconds,
}

/// Domain-specific error types
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Unrecognized menu option or video index
    InvalidChoice(String),
    /// Local source chosen but the temp folder holds no mp4 files
    EmptyTempFolder(String),
    /// Timestamp did not match `mm:ss`
    InvalidTimeFormat(TimeFormatIssue),
    /// End time not strictly after start time
    InvalidTimeRange { start: String, end: String },
    /// Downloader failed to start or exited non-zero
    DownloadFailed(String),
    /// Cutter failed to start or exited non-zero
    CutFailed(String),
    /// Title lookup failed; callers degrade to a fallback title
    TitleLookupFailed(String),
    /// Filesystem operation failed
    FsFail(String),
    /// Console input closed or unreadable
    InputClosed(String),
}

impl DomainError {
    /// Terminate-without-retry outcomes, as opposed to fatal failures
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidChoice(_)
                | DomainError::EmptyTempFolder(_)
                | DomainError::InvalidTimeRange { .. }
        )
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        if self.is_abort() {
            2
        } else {
            1
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::InvalidChoice(msg) => write!(f, "Invalid choice: {}", msg),
            DomainError::EmptyTempFolder(dir) => write!(f, "No mp4 videos found in {}", dir),
            DomainError::InvalidTimeFormat(TimeFormatIssue::IllegalCharacters) => {
                write!(f, "Only digits and ':' are allowed")
            }
            DomainError::InvalidTimeFormat(TimeFormatIssue::NotMinutesSeconds) => {
                write!(f, "Time must be mm:ss (for example 02:59)")
            }
            DomainError::InvalidTimeRange { start, end } => write!(
                f,
                "End time ({}) must be later than start time ({})",
                end, start
            ),
            DomainError::DownloadFailed(msg) => write!(f, "Failed to download video: {}", msg),
            DomainError::CutFailed(msg) => write!(f, "Failed to cut video: {}", msg),
            DomainError::TitleLookupFailed(msg) => write!(f, "Title lookup failed: {}", msg),
            DomainError::FsFail(msg) => write!(f, "Filesystem error: {}", msg),
            DomainError::InputClosed(msg) => write!(f, "Input closed: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_errors_exit_with_two() {
        let err = DomainError::InvalidChoice("3".to_string());
        assert!(err.is_abort());
        assert_eq!(err.exit_code(), 2);

        let err = DomainError::InvalidTimeRange {
            start: "00:10".to_string(),
            end: "00:05".to_string(),
        };
        assert!(err.is_abort());
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_fatal_errors_exit_with_one() {
        let err = DomainError::DownloadFailed("exit status 1".to_string());
        assert!(!err.is_abort());
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Failed to download video: exit status 1");
    }
}
