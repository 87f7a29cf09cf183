use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure that ended a traversal.
#[derive(Debug, Error)]
pub enum WalkError {
    /// The traversal root could not be inspected.
    #[error("failed to inspect traversal root '{}': {source}", path.display())]
    Root {
        /// Root passed to the builder, made absolute.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A directory could not be listed.
    #[error("failed to read directory '{}': {source}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A listed entry could not be inspected.
    #[error("failed to inspect metadata for '{}': {source}", path.display())]
    Metadata {
        /// Entry whose metadata was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A relative root could not be resolved against the working directory.
    #[error("failed to resolve the current directory: {0}")]
    CurrentDirectory(#[source] io::Error),
}

impl WalkError {
    /// Returns the path tied to the failure; `.` for the working directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Root { path, .. } | Self::ReadDir { path, .. } | Self::Metadata { path, .. } => {
                path
            }
            Self::CurrentDirectory(_) => Path::new("."),
        }
    }

    /// Returns the underlying I/O error.
    #[must_use]
    pub fn io_error(&self) -> &io::Error {
        match self {
            Self::Root { source, .. }
            | Self::ReadDir { source, .. }
            | Self::Metadata { source, .. }
            | Self::CurrentDirectory(source) => source,
        }
    }

    /// Reports whether the path no longer exists.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn display_names_the_path() {
        let error = WalkError::ReadDir {
            path: PathBuf::from("/srv/replica/sub"),
            source: io::Error::other("boom"),
        };
        assert_eq!(error.to_string(), "failed to read directory '/srv/replica/sub': boom");
        assert_eq!(error.path(), Path::new("/srv/replica/sub"));
        assert!(error.source().is_some());
    }

    #[test]
    fn not_found_is_detected_through_source() {
        let vanished = WalkError::Metadata {
            path: PathBuf::from("gone"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(vanished.is_not_found());

        let cwd = WalkError::CurrentDirectory(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!cwd.is_not_found());
        assert_eq!(cwd.path(), Path::new("."));
    }
}
