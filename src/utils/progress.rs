//! Download progress parsing

use std::sync::OnceLock;

use regex::Regex;

fn percentage_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"([0-9]+\.[0-9]+)%").ok())
        .as_ref()
}

/// First `NN.NN%` figure in a line of downloader output
pub fn parse_percentage(line: &str) -> Option<f32> {
    let caps = percentage_pattern()?.captures(line)?;
    caps.get(1)?.as_str().parse::<f32>().ok()
}

/// Single-line progress text
pub fn format_progress(percent: f32) -> String {
    format!("⬇️ Downloading... {:.2}%", percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_download_line() {
        let line = "[download]  45.2% of   12.34MiB at    1.23MiB/s ETA 00:05";
        assert_eq!(parse_percentage(line), Some(45.2));
    }

    #[test]
    fn test_parse_requires_decimal_point() {
        assert_eq!(parse_percentage("[download] 100% of 12.34MiB"), None);
        assert_eq!(parse_percentage("[download] 100.0% of 12.34MiB"), Some(100.0));
    }

    #[test]
    fn test_parse_ignores_other_lines() {
        assert_eq!(parse_percentage("[youtube] abc: Downloading webpage"), None);
        assert_eq!(parse_percentage(""), None);
    }

    #[test]
    fn test_format_progress() {
        assert_eq!(format_progress(45.23), "⬇️ Downloading... 45.23%");
        assert_eq!(format_progress(7.5), "⬇️ Downloading... 7.50%");
        assert_eq!(format_progress(100.0), "⬇️ Downloading... 100.00%");
    }
}
