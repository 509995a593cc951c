//! Startup-only abort path.
//!
//! A [`FatalError`] means the deployment is misconfigured or the attached
//! hardware is not supported.  There is nothing a caller can do about either,
//! so [`die_now`] logs the diagnostic and exits the process.  Nothing else in
//! the workspace should route errors through here.

use otbr_types::{BrError, CoprocessorKind, StackLogLevel};
use thiserror::Error;
use tracing::error;

/// Exit status used when startup is aborted.
pub const EXIT_FAILURE: i32 = 1;

/// Coarse classification of a [`FatalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FatalKind {
    /// Too many radio URLs were configured.
    ConfigurationOverflow,
    /// No host can be built: the co-processor kind is unsupported, or the
    /// stack refused its log level.
    UnsupportedCoprocessor,
}

/// Conditions that abort bootstrap.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FatalError {
    #[error("Too many Radio URLs! {count} supplied, the platform accepts at most {max}")]
    ConfigurationOverflow { count: usize, max: usize },

    #[error("Failed to set stack log level to {level}: {source}")]
    StackLogLevel {
        level: StackLogLevel,
        source: BrError,
    },

    #[error("Unknown coprocessor type: {0}")]
    UnsupportedCoprocessor(CoprocessorKind),
}

impl FatalError {
    pub fn kind(&self) -> FatalKind {
        match self {
            FatalError::ConfigurationOverflow { .. } => FatalKind::ConfigurationOverflow,
            FatalError::StackLogLevel { .. } | FatalError::UnsupportedCoprocessor(_) => {
                FatalKind::UnsupportedCoprocessor
            }
        }
    }
}

/// Report `err` and terminate the process with [`EXIT_FAILURE`].
pub fn die_now(err: &FatalError) -> ! {
    error!(kind = ?err.kind(), "{err}");
    // The subscriber may not be installed yet.
    eprintln!("[otbr] fatal: {err}");
    std::process::exit(EXIT_FAILURE)
}
