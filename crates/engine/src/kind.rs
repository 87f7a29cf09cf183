use std::fs;
use std::io;
use std::path::Path;

/// Classification of a path on either side of a mirror.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    /// Nothing exists at the path.
    Missing,
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symlink, fifo, device or socket.
    Other,
}

impl EntryKind {
    /// Classifies a replica path. Symlinks are never followed.
    ///
    /// A path below a non-directory is [`EntryKind::Missing`].
    pub fn of_replica(path: &Path) -> io::Result<Self> {
        match fs::symlink_metadata(path) {
            Ok(metadata) => Ok(Self::from_file_type(metadata.file_type())),
            Err(error)
                if matches!(
                    error.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) =>
            {
                Ok(Self::Missing)
            }
            Err(error) => Err(error),
        }
    }

    /// Classifies a source path.
    ///
    /// A symlink resolving to a regular file counts as [`EntryKind::File`]; any
    /// other symlink, including a dangling one, is [`EntryKind::Other`].
    pub fn of_source(path: &Path) -> io::Result<Self> {
        let kind = Self::of_replica(path)?;
        if kind != Self::Other {
            return Ok(kind);
        }
        match fs::metadata(path) {
            Ok(target) if target.is_file() => Ok(Self::File),
            _ => Ok(Self::Other),
        }
    }

    /// Maps a file type without following links.
    #[must_use]
    pub fn from_file_type(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }

    /// Reports whether the entry exists.
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}
