use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// One entry below the traversal root.
#[derive(Debug)]
pub struct WalkEntry {
    pub(crate) relative_path: PathBuf,
    pub(crate) metadata: fs::Metadata,
}

impl WalkEntry {
    /// Returns the path relative to the traversal root.
    #[must_use]
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    /// Provides access to the [`fs::Metadata`] captured for the entry.
    ///
    /// Metadata is queried with [`fs::symlink_metadata`], so a symbolic link
    /// reports its own type rather than its target's.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// Reports whether the entry is a directory (never true for symlinks).
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.metadata.file_type().is_dir()
    }
}
