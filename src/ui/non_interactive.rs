//! Plain UI for pipes, redirects and CI.

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive use.
///
/// Writes unstyled text: results to stdout, notices and errors to stderr.
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
        println!("{}", msg);
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_notices() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
