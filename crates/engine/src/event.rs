use std::fmt;
use std::path::Path;

use logging::Severity;

/// Operator-facing event emitted while reconciling.
///
/// The [`Display`](fmt::Display) form is the exact message written to the
/// event log.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyncEvent<'a> {
    /// The replica root did not exist and was created.
    ReplicaRootCreated {
        /// Replica root.
        path: &'a Path,
    },
    /// A directory was created in the replica.
    DirectoryCreated {
        /// Replica directory.
        path: &'a Path,
    },
    /// A file absent from the replica was copied.
    FileCopied {
        /// Source file.
        source: &'a Path,
        /// Replica file.
        replica: &'a Path,
    },
    /// A replica file with different content was overwritten.
    FileUpdated {
        /// Source file.
        source: &'a Path,
        /// Replica file.
        replica: &'a Path,
    },
    /// A non-directory entry was removed from the replica.
    FileRemoved {
        /// Removed replica path.
        path: &'a Path,
    },
    /// A directory subtree was removed from the replica.
    DirectoryRemoved {
        /// Removed replica path.
        path: &'a Path,
    },
    /// A copied file did not fingerprint identically to its source.
    VerificationFailed {
        /// Replica file.
        path: &'a Path,
    },
    /// Both passes finished.
    CycleCompleted,
}

impl SyncEvent<'_> {
    /// Returns the severity the event is logged at.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::VerificationFailed { .. } => Severity::Error,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for SyncEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReplicaRootCreated { path } => {
                write!(f, "Created replica folder: {}", path.display())
            }
            Self::DirectoryCreated { path } => write!(f, "Directory created: {}", path.display()),
            Self::FileCopied { source, replica } => write!(
                f,
                "File copied: {} -> {}",
                source.display(),
                replica.display()
            ),
            Self::FileUpdated { source, replica } => write!(
                f,
                "File updated: {} -> {}",
                source.display(),
                replica.display()
            ),
            Self::FileRemoved { path } => write!(f, "File removed: {}", path.display()),
            Self::DirectoryRemoved { path } => write!(f, "Directory removed: {}", path.display()),
            Self::VerificationFailed { path } => {
                write!(f, "Verification failed: {}", path.display())
            }
            Self::CycleCompleted => f.write_str("Synchronization completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_messages_name_both_sides() {
        let event = SyncEvent::FileCopied {
            source: Path::new("/src/a.txt"),
            replica: Path::new("/dst/a.txt"),
        };
        assert_eq!(event.to_string(), "File copied: /src/a.txt -> /dst/a.txt");

        let event = SyncEvent::FileUpdated {
            source: Path::new("/src/a.txt"),
            replica: Path::new("/dst/a.txt"),
        };
        assert_eq!(event.to_string(), "File updated: /src/a.txt -> /dst/a.txt");
    }

    #[test]
    fn removal_messages() {
        assert_eq!(
            SyncEvent::FileRemoved {
                path: Path::new("/dst/stale.txt")
            }
            .to_string(),
            "File removed: /dst/stale.txt"
        );
        assert_eq!(
            SyncEvent::DirectoryRemoved {
                path: Path::new("/dst/old")
            }
            .to_string(),
            "Directory removed: /dst/old"
        );
    }

    #[test]
    fn only_verification_failures_are_errors() {
        let path = Path::new("/dst/a.txt");
        assert_eq!(
            SyncEvent::VerificationFailed { path }.severity(),
            Severity::Error
        );
        assert_eq!(SyncEvent::FileRemoved { path }.severity(), Severity::Info);
        assert_eq!(SyncEvent::CycleCompleted.severity(), Severity::Info);
        assert_eq!(
            SyncEvent::CycleCompleted.to_string(),
            "Synchronization completed"
        );
    }
}
