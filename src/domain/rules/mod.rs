// Domain rules - Business logic and policies

use chrono::NaiveDate;
use regex::Regex;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Auto-naming for clips: `clip<N>-<DD-MM-YYYY>.mp4`
pub struct ClipNamer;

impl ClipNamer {
    /// Date stamp used in clip names
    pub fn date_stamp(today: NaiveDate) -> String {
        today.format("%d-%m-%Y").to_string()
    }

    /// Count existing clips made on `today`
    pub fn count_same_day(existing: &[String], today: NaiveDate) -> usize {
        let pattern = format!(
            r"^clip[0-9]+-{}\.mp4$",
            regex::escape(&Self::date_stamp(today))
        );
        match Regex::new(&pattern) {
            Ok(re) => existing.iter().filter(|name| re.is_match(name)).count(),
            Err(_) => 0,
        }
    }

    /// Next free clip name for `today`
    ///
    /// Starts at one past the number of same-day clips. If that name is
    /// already taken (an earlier clip was deleted), keeps counting up.
    pub fn next_name(existing: &[String], today: NaiveDate) -> String {
        let stamp = Self::date_stamp(today);
        let mut n = Self::count_same_day(existing, today) + 1;
        loop {
            let candidate = format!("clip{}-{}{}", n, stamp, VIDEO_EXTENSION);
            if !existing.iter().any(|name| name == &candidate) {
                return candidate;
            }
            n += 1;
        }
    }
}

/// Normalization of a user-typed output file name
pub struct OutputNamePolicy;

impl OutputNamePolicy {
    /// `None` for blank input, otherwise the name with exactly one `.mp4`
    pub fn normalize(input: &str) -> Option<String> {
        let name = input.trim();
        if name.is_empty() {
            return None;
        }
        if name.ends_with(VIDEO_EXTENSION) {
            Some(name.to_string())
        } else {
            Some(format!("{}{}", name, VIDEO_EXTENSION))
        }
    }
}

/// Menu answers
pub struct MenuChoice;

impl MenuChoice {
    /// `1` is a remote download, `2` a local file
    pub fn parse_source(input: &str) -> Result<VideoSource, DomainError> {
        match input.trim() {
            "1" => Ok(VideoSource::Remote),
            "2" => Ok(VideoSource::Local),
            other => Err(DomainError::InvalidChoice(format!(
                "'{}' is not a video source",
                other
            ))),
        }
    }

    /// 1-based index into a list of `len` entries, returned 0-based
    pub fn parse_index(input: &str, len: usize) -> Result<usize, DomainError> {
        let trimmed = input.trim();
        match trimmed.parse::<usize>() {
            Ok(n) if n >= 1 && n <= len => Ok(n - 1),
            _ => Err(DomainError::InvalidChoice(format!(
                "'{}' is not a number between 1 and {}",
                trimmed, len
            ))),
        }
    }
}

/// Whether to delete the temp video after cutting
pub struct CleanupDecision;

impl CleanupDecision {
    /// Only an explicit `y` or `Y` deletes
    pub fn wants_delete(input: &str) -> bool {
        input.trim().eq_ignore_ascii_case("y")
    }
}
