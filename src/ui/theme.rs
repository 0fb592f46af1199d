//! Visual theme and styling.

use console::Style;

/// gapscan's visual theme.
#[derive(Debug, Clone)]
pub struct GapscanTheme {
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
}

impl Default for GapscanTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GapscanTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            warning: Style::new(),
            error: Style::new(),
        }
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), self.error.apply_to(msg))
    }
}

/// Check if colors should be used.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
