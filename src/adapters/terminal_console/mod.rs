// Terminal console adapter - Prompts on stdout, answers from stdin

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// Interactive terminal adapter
///
/// Holds the process-wide stdin reader until `close` is called.
pub struct TerminalConsoleAdapter {
    input: Mutex<Option<Lines<BufReader<Stdin>>>>,
}

impl TerminalConsoleAdapter {
    /// Create new terminal console adapter
    pub fn new() -> Self {
        Self {
            input: Mutex::new(Some(BufReader::new(tokio::io::stdin()).lines())),
        }
    }

    fn write_stdout(text: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(text.as_bytes());
        let _ = stdout.flush();
    }
}

impl Default for TerminalConsoleAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConsolePort for TerminalConsoleAdapter {
    async fn ask(&self, prompt: &str) -> Result<String, DomainError> {
        Self::write_stdout(prompt);

        let mut guard = self.input.lock().await;
        let lines = guard
            .as_mut()
            .ok_or_else(|| DomainError::InputClosed("console already closed".to_string()))?;

        match lines.next_line().await {
            Ok(Some(line)) => Ok(line.trim_end_matches('\r').to_string()),
            Ok(None) => Err(DomainError::InputClosed("end of input".to_string())),
            Err(e) => Err(DomainError::InputClosed(e.to_string())),
        }
    }

    fn say(&self, message: &str) {
        Self::write_stdout(&format!("{}\n", message));
    }

    fn progress(&self, message: &str) {
        Self::write_stdout(&format!("\r{}", message));
    }

    fn report_error(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "{}", message);
    }

    async fn close(&self) {
        if self.input.lock().await.take().is_some() {
            debug!("Console input closed");
        }
    }
}
