//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show everything, including skipped-step notes.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (spinners + final status).
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags. Quiet wins.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode shows informational detail.
    pub fn shows_detail(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows plain messages.
    pub fn shows_messages(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }
}
