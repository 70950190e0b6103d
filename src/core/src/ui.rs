//! Output sink for command results.

/// Ordered, append-only line output.
pub trait Ui: Send {
    /// Write one line.
    fn say(&mut self, message: &str);

    /// Mark the current step as successful.
    fn ok(&mut self) {
        self.say("OK");
    }

    /// Report a failure: a `FAILED` status line followed by the message.
    fn failed(&mut self, message: &str) {
        self.say("FAILED");
        self.say(message);
    }

    /// Report a usage failure so the help layer can print usage.
    fn failed_with_usage(&mut self, message: &str);
}

impl<T: Ui + ?Sized> Ui for &mut T {
    fn say(&mut self, message: &str) {
        (**self).say(message)
    }

    fn ok(&mut self) {
        (**self).ok()
    }

    fn failed(&mut self, message: &str) {
        (**self).failed(message)
    }

    fn failed_with_usage(&mut self, message: &str) {
        (**self).failed_with_usage(message)
    }
}

/// In-memory sink that records every line.
#[derive(Debug, Default)]
pub struct BufferUi {
    pub outputs: Vec<String>,
    pub failed_with_usage: bool,
}

impl BufferUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines joined with `\n`.
    pub fn text(&self) -> String {
        self.outputs.join("\n")
    }

    /// True if any line contains every one of `parts`.
    pub fn contains_line(&self, parts: &[&str]) -> bool {
        self.outputs
            .iter()
            .any(|line| parts.iter().all(|p| line.contains(p)))
    }
}

impl Ui for BufferUi {
    fn say(&mut self, message: &str) {
        self.outputs
            .extend(message.split('\n').map(|line| line.to_string()));
    }

    fn failed_with_usage(&mut self, message: &str) {
        self.failed_with_usage = true;
        self.failed(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_records_lines_in_order() {
        let mut ui = BufferUi::new();
        ui.say("first");
        ui.ok();
        ui.say("a\nb");
        assert_eq!(ui.outputs, vec!["first", "OK", "a", "b"]);
    }

    #[test]
    fn test_failed_writes_status_then_message() {
        let mut ui = BufferUi::new();
        ui.failed("half-past-tea-time");
        assert_eq!(ui.outputs, vec!["FAILED", "half-past-tea-time"]);
        assert!(!ui.failed_with_usage);
    }

    #[test]
    fn test_failed_with_usage_sets_flag() {
        let mut ui = BufferUi::new();
        ui.failed_with_usage("Incorrect Usage.");
        assert!(ui.failed_with_usage);
        assert!(ui.contains_line(&["Incorrect Usage."]));
    }

    #[test]
    fn test_borrowed_sink_writes_through() {
        fn report(mut ui: impl Ui) {
            ui.ok();
            ui.failed_with_usage("Incorrect Usage.");
        }

        let mut ui = BufferUi::new();
        report(&mut ui);
        assert!(ui.failed_with_usage);
        assert_eq!(ui.outputs, vec!["OK", "FAILED", "Incorrect Usage."]);
    }

    #[test]
    fn test_contains_line_needs_all_parts_on_one_line() {
        let mut ui = BufferUi::new();
        ui.say("Name: my-group");
        ui.say("Spaces: No spaces");
        assert!(ui.contains_line(&["Name:", "my-group"]));
        assert!(!ui.contains_line(&["Name:", "No spaces"]));
    }
}
