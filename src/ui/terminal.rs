//! Interactive terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, NonInteractiveUI, OutputMode, ProgressSpinner, SpinnerHandle, StatusKind,
    Theme, UserInterface,
};

/// Interactive terminal UI implementation.
///
/// Warnings and errors go to stderr, everything else to stdout.
pub struct TerminalUI {
    term: Term,
    err_term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            err_term: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err_term, "{}", self.theme.format_error(msg)).ok();
    }

    fn item(&mut self, kind: StatusKind, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "  {}", kind.format(&self.theme, msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "  {}", self.theme.format_hint(hint)).ok();
    }

    fn command_output(&mut self, output: &str) {
        if self.mode.shows_command_output() {
            for line in output.lines() {
                writeln!(self.term, "    {}", self.theme.dim.apply_to(line)).ok();
            }
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message, self.theme.clone()))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }
}

/// Create the appropriate UI for the environment.
///
/// Falls back to [`NonInteractiveUI`] when stdout is not a terminal, even
/// if `interactive` was requested.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
