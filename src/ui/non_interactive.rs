//! Plain-text UI for pipes, CI and other headless environments.

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Writes unstyled lines with the same icons as the terminal UI. Warnings
/// and errors go to stderr.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("⚠ {}", msg);
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn item(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_details() {
            println!("  {}", kind.format_plain(msg));
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            println!("{}", title);
            println!("{}", "=".repeat(50));
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_details() {
            println!("\n{}", title);
        }
    }

    fn show_hint(&mut self, hint: &str) {
        println!("  {}", hint);
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                println!("    {}", line);
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("{}", message);
        }
        Box::new(LineSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that prints only the final outcome.
struct LineSpinner;

impl SpinnerHandle for LineSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        println!("✓ {}", msg);
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_is_not_interactive() {
        let ui = NonInteractiveUI::new(OutputMode::Normal);
        assert!(!ui.is_interactive());
        assert_eq!(ui.output_mode(), OutputMode::Normal);
    }

    #[test]
    fn spinner_handle_is_usable() {
        let mut ui = NonInteractiveUI::new(OutputMode::Quiet);
        let mut spinner = ui.start_spinner("Downloading");
        spinner.set_message("50%");
        spinner.finish_success("Downloaded");
    }
}
