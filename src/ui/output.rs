//! Output verbosity.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Everything, plus a debug log line for each command run.
    Verbose,
    /// Show progress and status.
    #[default]
    Normal,
    /// Only warnings, errors and alerts.
    Quiet,
}

impl OutputMode {
    /// Pick a mode from the `--verbose` / `--quiet` flags.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this mode logs the commands it runs.
    pub fn shows_command_output(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        !matches!(self, Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
