use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use walk::WalkError;

/// Structural failure that aborts a reconciliation cycle.
///
/// Per-file races are never reported through this type; they are skipped and
/// counted in the [`CycleSummary`](crate::CycleSummary) instead.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// The source root is missing or unreadable.
    #[error("source folder '{}' is unavailable: {source}", path.display())]
    SourceUnavailable {
        /// Source root as supplied by the caller.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The source root exists but is not a directory.
    #[error("source folder '{}' is not a directory", path.display())]
    SourceNotDirectory {
        /// Source root as supplied by the caller.
        path: PathBuf,
    },
    /// The replica root exists but is not a directory.
    #[error("replica folder '{}' exists but is not a directory", path.display())]
    ReplicaNotDirectory {
        /// Replica root as supplied by the caller.
        path: PathBuf,
    },
    /// One root lies inside the other.
    #[error(
        "source folder '{}' and replica folder '{}' overlap",
        source_root.display(),
        replica_root.display()
    )]
    OverlappingRoots {
        /// Resolved source root.
        source_root: PathBuf,
        /// Resolved replica root.
        replica_root: PathBuf,
    },
    /// A filesystem operation failed.
    #[error("failed to {action} '{}': {source}", path.display())]
    Io {
        /// Short description of the attempted operation.
        action: &'static str,
        /// Path the operation targeted.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// Traversal of either tree failed.
    #[error(transparent)]
    Walk(#[from] WalkError),
}

impl ReconcileError {
    /// Constructs an I/O error with action context.
    #[must_use]
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    /// Returns the path associated with the failure, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::SourceUnavailable { path, .. }
            | Self::SourceNotDirectory { path }
            | Self::ReplicaNotDirectory { path }
            | Self::Io { path, .. } => Some(path),
            Self::OverlappingRoots { replica_root, .. } => Some(replica_root),
            Self::Walk(error) => Some(error.path()),
        }
    }
}
