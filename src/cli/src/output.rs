//! Terminal output sink for CLI commands.

use std::io::Write;

use asg_core::Ui;

/// Line-oriented sink over any writer (stdout by default).
pub struct TerminalUi<W: Write + Send = std::io::Stdout> {
    out: W,
}

impl TerminalUi {
    /// Sink writing to the process's stdout.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalUi<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Ui for TerminalUi<W> {
    fn say(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "{message}") {
            tracing::debug!(error = %e, "Failed to write command output");
        }
    }

    /// Usage help is printed by the dispatcher from the command outcome.
    fn failed_with_usage(&mut self, message: &str) {
        self.failed(message);
    }
}
