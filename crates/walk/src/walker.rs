use crate::entry::WalkEntry;
use crate::error::WalkError;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::trace;

/// Depth-first iterator over the entries below a root directory.
///
/// The root itself is never yielded. A root that is not a directory has no
/// entries.
pub struct Walker {
    contents_first: bool,
    stack: Vec<DirectoryState>,
    finished: bool,
}

impl Walker {
    pub(crate) fn new(root: PathBuf, contents_first: bool) -> Result<Self, WalkError> {
        let root = absolutize(root)?;
        trace!(target: "dirmirror::walk", root = %root.display(), contents_first, "starting traversal");

        // The root is resolved through symlinks; entries below it are not.
        let metadata = fs::metadata(&root).map_err(|source| WalkError::Root {
            path: root.clone(),
            source,
        })?;

        let mut stack = Vec::new();
        if metadata.is_dir() {
            stack.push(DirectoryState::new(root, PathBuf::new(), None)?);
        }

        Ok(Self {
            contents_first,
            stack,
            finished: false,
        })
    }

    /// Inspects one listed name. Returns `Ok(None)` when nothing should be
    /// yielded yet: the entry vanished, or it is a directory whose own entry is
    /// deferred until its contents have been produced.
    fn visit(
        &mut self,
        full_path: PathBuf,
        relative_path: PathBuf,
    ) -> Result<Option<WalkEntry>, WalkError> {
        let metadata = match fs::symlink_metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                trace!(target: "dirmirror::walk", path = %full_path.display(), "entry vanished before inspection");
                return Ok(None);
            }
            Err(source) => {
                return Err(WalkError::Metadata {
                    path: full_path,
                    source,
                });
            }
        };

        let entry = WalkEntry {
            relative_path,
            metadata,
        };
        if !entry.is_dir() {
            return Ok(Some(entry));
        }

        let prefix = entry.relative_path.clone();
        let (deferred, yielded) = if self.contents_first {
            (Some(entry), None)
        } else {
            (None, Some(entry))
        };
        match DirectoryState::new(full_path, prefix, deferred) {
            Ok(state) => {
                self.stack.push(state);
                Ok(yielded)
            }
            Err(error) if error.is_not_found() => {
                trace!(target: "dirmirror::walk", path = %error.path().display(), "directory vanished before listing");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }
}

impl Iterator for Walker {
    type Item = Result<WalkEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let state = self.stack.last_mut()?;
            let Some(name) = state.next_name() else {
                if let Some(entry) = self.stack.pop()?.deferred {
                    return Some(Ok(entry));
                }
                continue;
            };
            let full_path = state.fs_path.join(&name);
            let relative_path = state.relative_prefix.join(&name);

            match self.visit(full_path, relative_path) {
                Ok(Some(entry)) => return Some(Ok(entry)),
                Ok(None) => {}
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
    }
}

/// A directory whose sorted names are being produced.
#[derive(Debug)]
struct DirectoryState {
    fs_path: PathBuf,
    relative_prefix: PathBuf,
    entries: std::vec::IntoIter<OsString>,
    deferred: Option<WalkEntry>,
}

impl DirectoryState {
    fn new(
        fs_path: PathBuf,
        relative_prefix: PathBuf,
        deferred: Option<WalkEntry>,
    ) -> Result<Self, WalkError> {
        let read_dir_error = |source| WalkError::ReadDir {
            path: fs_path.clone(),
            source,
        };
        let mut entries = fs::read_dir(&fs_path)
            .map_err(read_dir_error)?
            .map(|entry| entry.map(|entry| entry.file_name()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(read_dir_error)?;
        entries.sort();

        trace!(target: "dirmirror::walk", path = %fs_path.display(), count = entries.len(), "listed directory");

        Ok(Self {
            fs_path,
            relative_prefix,
            entries: entries.into_iter(),
            deferred,
        })
    }

    fn next_name(&mut self) -> Option<OsString> {
        self.entries.next()
    }
}

fn absolutize(path: PathBuf) -> Result<PathBuf, WalkError> {
    if path.is_absolute() {
        Ok(path)
    } else {
        let cwd = env::current_dir().map_err(WalkError::CurrentDirectory)?;
        Ok(cwd.join(path))
    }
}
