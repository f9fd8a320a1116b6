//! Common utilities and helpers

pub mod logging;
pub mod progress;

use std::process::ExitStatus;

/// Last `max_lines` non-empty lines of captured tool output, joined by newlines
pub fn tail_lines(text: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .collect();
    let skip = lines.len().saturating_sub(max_lines);
    lines[skip..].join("\n")
}

/// Error text for a tool that exited unsuccessfully, with its stderr tail if any
pub fn exit_failure(program: &str, status: &ExitStatus, stderr: &str, max_lines: usize) -> String {
    let tail = tail_lines(stderr, max_lines);
    if tail.is_empty() {
        format!("{} exited with {}", program, status)
    } else {
        format!("{} exited with {}: {}", program, status, tail)
    }
}
