//! Styled terminal UI.

use std::io::Write;

use console::Term;

use super::non_interactive::NonInteractiveUI;
use super::theme::{should_use_colors, GapscanTheme};
use super::{OutputMode, UserInterface};

/// UI for an interactive terminal session.
pub struct TerminalUI {
    mode: OutputMode,
    out: Term,
    err: Term,
    theme: GapscanTheme,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            GapscanTheme::new()
        } else {
            GapscanTheme::plain()
        };
        Self {
            mode,
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_notices() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

/// Check if running under a CI service.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Create the appropriate UI based on context.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    if interactive && Term::stdout().is_term() {
        Box::new(TerminalUI::new(mode))
    } else {
        Box::new(NonInteractiveUI::new(mode))
    }
}
