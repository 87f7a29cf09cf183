mod copy;
mod forward;
mod prune;


use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use checksums::{ContentFingerprinter, Fingerprint};
use logging::{EventLog, LogRecord};
use tracing::debug;

use crate::error::ReconcileError;
use crate::event::SyncEvent;
use crate::options::MirrorOptions;
use crate::summary::CycleSummary;

/// Makes a replica directory tree agree with a source tree.
///
/// A reconciler holds no per-tree state: every call to
/// [`reconcile`](Self::reconcile) re-walks both trees, so it can be invoked
/// repeatedly on the same pair of roots.
pub struct Reconciler {
    log: Arc<dyn EventLog>,
    fingerprinter: ContentFingerprinter,
    options: MirrorOptions,
}

impl Reconciler {
    /// Creates a reconciler with default [`MirrorOptions`].
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self::with_options(log, MirrorOptions::default())
    }

    /// Creates a reconciler with explicit options.
    pub fn with_options(log: Arc<dyn EventLog>, options: MirrorOptions) -> Self {
        let fingerprinter = ContentFingerprinter::new(Arc::clone(&log));
        Self {
            log,
            fingerprinter,
            options,
        }
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &MirrorOptions {
        &self.options
    }

    /// Runs one reconciliation cycle.
    ///
    /// The source root must be an existing directory. The replica root is
    /// created, with any missing ancestors, when absent. On success the
    /// replica holds exactly the source's directories and regular files, and
    /// `Synchronization completed` has been logged.
    pub fn reconcile(
        &self,
        source_root: &Path,
        replica_root: &Path,
    ) -> Result<CycleSummary, ReconcileError> {
        check_source_root(source_root)?;
        check_disjoint(source_root, replica_root)?;

        let mut summary = CycleSummary::default();
        self.ensure_replica_root(replica_root, &mut summary)?;
        self.mirror_source(source_root, replica_root, &mut summary)?;
        self.prune_replica(source_root, replica_root, &mut summary)?;

        self.emit(SyncEvent::CycleCompleted);
        debug!(
            target: "dirmirror::engine",
            copied = summary.files_copied(),
            updated = summary.files_updated(),
            removed = summary.files_removed(),
            directories_removed = summary.directories_removed(),
            skipped = summary.files_skipped(),
            "cycle finished"
        );
        Ok(summary)
    }

    fn ensure_replica_root(
        &self,
        replica_root: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        match fs::metadata(replica_root) {
            Ok(metadata) if metadata.is_dir() => Ok(()),
            Ok(_) => Err(ReconcileError::ReplicaNotDirectory {
                path: replica_root.to_path_buf(),
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                fs::create_dir_all(replica_root).map_err(|error| {
                    ReconcileError::io("create replica folder", replica_root, error)
                })?;
                summary.record_replica_root_created();
                self.emit(SyncEvent::ReplicaRootCreated { path: replica_root });
                Ok(())
            }
            Err(error) => Err(ReconcileError::io(
                "inspect replica folder",
                replica_root,
                error,
            )),
        }
    }

    /// Re-fingerprints a freshly copied file and reports a mismatch.
    fn verify_copy(&self, replica: &Path, expected: Fingerprint, summary: &mut CycleSummary) {
        if self.fingerprinter.digest(replica) != Some(expected) {
            summary.record_verification_failure();
            self.emit(SyncEvent::VerificationFailed { path: replica });
        }
    }

    fn emit(&self, event: SyncEvent<'_>) {
        self.log
            .record(LogRecord::new(event.severity(), event.to_string()));
    }
}

impl fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reconciler")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn check_source_root(source_root: &Path) -> Result<(), ReconcileError> {
    match fs::metadata(source_root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(ReconcileError::SourceNotDirectory {
            path: source_root.to_path_buf(),
        }),
        Err(source) => Err(ReconcileError::SourceUnavailable {
            path: source_root.to_path_buf(),
            source,
        }),
    }
}

/// Rejects roots where one contains the other.
fn check_disjoint(source_root: &Path, replica_root: &Path) -> Result<(), ReconcileError> {
    let source = resolve(source_root)
        .map_err(|error| ReconcileError::io("resolve source folder", source_root, error))?;
    let replica = resolve(replica_root)
        .map_err(|error| ReconcileError::io("resolve replica folder", replica_root, error))?;
    if source.starts_with(&replica) || replica.starts_with(&source) {
        return Err(ReconcileError::OverlappingRoots {
            source_root: source,
            replica_root: replica,
        });
    }
    Ok(())
}

/// Canonicalizes the longest existing prefix of `path` and appends the rest.
fn resolve(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            let absolute = std::path::absolute(path)?;
            match (absolute.parent(), absolute.file_name()) {
                (Some(parent), Some(name)) => Ok(resolve(parent)?.join(name)),
                _ => Ok(absolute),
            }
        }
        Err(error) => Err(error),
    }
}
