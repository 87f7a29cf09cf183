use std::io;
use std::path::PathBuf;

use engine::ReconcileError;
use thiserror::Error;

/// Exit code after a clean stop.
pub const SUCCESS_EXIT_CODE: i32 = 0;
/// Exit code for invalid arguments and unusable log files.
pub const USAGE_EXIT_CODE: i32 = 1;
/// Exit code when a cycle fails with a structural error.
pub const SYNC_FAILURE_EXIT_CODE: i32 = 2;

/// Failure of the command-line front-end.
#[derive(Debug, Error)]
pub enum CliError {
    /// The arguments could not be parsed.
    #[error(transparent)]
    Usage(#[from] clap::Error),
    /// The log file could not be opened for appending.
    #[error("cannot open log file '{}': {source}", path.display())]
    LogFile {
        /// Log file path as given on the command line.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// A synchronization cycle failed.
    #[error("Synchronization failed: {0}")]
    Sync(#[from] ReconcileError),
}

impl CliError {
    /// Returns the process exit code for this failure.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::LogFile { .. } => USAGE_EXIT_CODE,
            Self::Sync(_) => SYNC_FAILURE_EXIT_CODE,
        }
    }
}
