//! Bottom-up pass removing replica entries absent from the source.

use std::fs;
use std::io;
use std::path::Path;

use walk::WalkBuilder;

use super::Reconciler;
use crate::error::ReconcileError;
use crate::event::SyncEvent;
use crate::kind::EntryKind;
use crate::summary::CycleSummary;

impl Reconciler {
    /// Walks the replica post-order, so a stale directory's contents are
    /// removed and logged before the directory itself.
    pub(super) fn prune_replica(
        &self,
        source_root: &Path,
        replica_root: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        let walker = WalkBuilder::new(replica_root)
            .contents_first(true)
            .build()?;
        for entry in walker {
            let entry = entry?;
            let relative = entry.relative_path();
            let source = source_root.join(relative);
            let replica = replica_root.join(relative);
            let counterpart = EntryKind::of_source(&source)
                .map_err(|error| ReconcileError::io("inspect source entry", &source, error))?;

            if entry.is_dir() {
                if counterpart != EntryKind::Directory {
                    self.remove_directory(&replica, summary)?;
                }
            } else if counterpart != EntryKind::File {
                self.remove_file(&replica, summary)?;
            }
        }
        Ok(())
    }

    /// Removes a non-directory replica entry. An entry already gone is ignored.
    pub(super) fn remove_file(
        &self,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        match fs::remove_file(replica) {
            Ok(()) => {
                summary.record_file_removed();
                self.emit(SyncEvent::FileRemoved { path: replica });
                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ReconcileError::io("remove file", replica, error)),
        }
    }

    /// Removes a replica directory and anything still inside it.
    pub(super) fn remove_directory(
        &self,
        replica: &Path,
        summary: &mut CycleSummary,
    ) -> Result<(), ReconcileError> {
        match fs::remove_dir_all(replica) {
            Ok(()) => {
                summary.record_directory_removed();
                self.emit(SyncEvent::DirectoryRemoved { path: replica });
                Ok(())
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(ReconcileError::io("remove directory", replica, error)),
        }
    }
}
