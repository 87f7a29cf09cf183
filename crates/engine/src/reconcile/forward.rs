//! Top-down pass creating directories and copying changed files.

use std::fs;
use std::path::Path;

use tracing::trace;
use walk::WalkBuilder;

use super::Reconciler;
use super::copy::{CopyOutcome, copy_file};
use crate::error::ReconcileError;
use crate::event::SyncEvent;
use crate::kind::EntryKind;
use crate::summary::CycleSummary;

impl Reconciler {
    /// Walks the source pre-order so every directory exists in the replica
    /// before its contents are mirrored.
    pub(super) fn mirror_source(
        &self,
        source_root: &Path,
        replica_root: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        let walker = WalkBuilder::new(source_root).build()?;
        for entry in walker {
            let entry = entry?;
            let relative = entry.relative_path();
            let source = source_root.join(relative);
            let replica = replica_root.join(relative);

            let kind = match EntryKind::from_file_type(entry.metadata().file_type()) {
                EntryKind::Other => EntryKind::of_source(&source).map_err(|error| {
                    ReconcileError::io("inspect source entry", &source, error)
                })?,
                kind => kind,
            };

            match kind {
                EntryKind::Directory => self.mirror_directory(&replica, summary)?,
                EntryKind::File => self.mirror_file(&source, &replica, summary)?,
                EntryKind::Other | EntryKind::Missing => {
                    trace!(
                        target: "dirmirror::engine",
                        path = %source.display(),
                        "not mirroring non-regular source entry"
                    );
                }
            }
        }
        Ok(())
    }

    fn mirror_directory(
        &self,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        match inspect_replica(replica)? {
            EntryKind::Directory => return Ok(()),
            EntryKind::Missing => {}
            EntryKind::File | EntryKind::Other => self.remove_file(replica, summary)?,
        }
        fs::create_dir_all(replica)
            .map_err(|error| ReconcileError::io("create directory", replica, error))?;
        summary.record_directory_created();
        self.emit(SyncEvent::DirectoryCreated { path: replica });
        Ok(())
    }

    fn mirror_file(
        &self,
        source: &Path,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        match inspect_replica(replica)? {
            EntryKind::File => self.update_file(source, replica, summary),
            EntryKind::Missing => self.copy_new_file(source, replica, summary),
            EntryKind::Directory => {
                self.remove_directory(replica, summary)?;
                self.copy_new_file(source, replica, summary)
            }
            EntryKind::Other => {
                self.remove_file(replica, summary)?;
                self.copy_new_file(source, replica, summary)
            }
        }
    }

    fn copy_new_file(
        &self,
        source: &Path,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        let expected = if self.options.verifies_copies() {
            self.fingerprinter.digest(source)
        } else {
            None
        };

        match copy_file(source, replica, &self.options)? {
            CopyOutcome::SourceVanished => {
                trace!(target: "dirmirror::engine", path = %source.display(), "source vanished before copy");
                summary.record_file_skipped();
            }
            CopyOutcome::Copied => {
                summary.record_file_copied();
                self.emit(SyncEvent::FileCopied { source, replica });
                if let Some(expected) = expected {
                    self.verify_copy(replica, expected, summary);
                }
            }
        }
        Ok(())
    }

    /// Overwrites `replica` only when both fingerprints are known and differ.
    pub(super) fn update_file(
        &self,
        source: &Path,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        let source_digest = self.fingerprinter.digest(source);
        let replica_digest = self.fingerprinter.digest(replica);
        let (Some(source_digest), Some(replica_digest)) = (source_digest, replica_digest) else {
            summary.record_file_skipped();
            return Ok(());
        };
        if source_digest == replica_digest {
            return Ok(());
        }

        match copy_file(source, replica, &self.options)? {
            CopyOutcome::SourceVanished => summary.record_file_skipped(),
            CopyOutcome::Copied => {
                summary.record_file_updated();
                self.emit(SyncEvent::FileUpdated { source, replica });
                if self.options.verifies_copies() {
                    self.verify_copy(replica, source_digest, summary);
                }
            }
        }
        Ok(())
    }
}

fn inspect_replica(replica: &Path) -> Result<EntryKind, ReconcileError> {
    EntryKind::of_replica(replica)
        .map_err(|error| ReconcileError::io("inspect replica entry", replica, error))
}
