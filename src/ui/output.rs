//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show gap details and a summary.
    Verbose,
    /// Show gaps and warnings.
    #[default]
    Normal,
    /// Show gaps only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-gap details and the summary.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows warning notices.
    pub fn shows_notices(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
