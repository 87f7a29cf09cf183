use std::fs::{self, File};
use std::io;
use std::path::Path;

use filetime::{FileTime, set_file_times};

use crate::error::ReconcileError;
use crate::options::MirrorOptions;

/// Prefix of the staging files written next to their final destination.
pub(super) const STAGING_PREFIX: &str = ".dirmirror.";

/// Result of mirroring one file's content.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum CopyOutcome {
    /// The destination now holds the source bytes.
    Copied,
    /// The source disappeared before it could be opened.
    SourceVanished,
}

/// Copies `source` onto `destination`.
///
/// The bytes are staged in a temporary file in the destination directory and
/// renamed into place, so an existing replica file is replaced atomically and
/// a read-only replica file never blocks an update.
pub(super) fn copy_file(
    source: &Path,
    destination: &Path,
    options: &MirrorOptions,
) -> Result<CopyOutcome, ReconcileError> {
    let mut reader = match File::open(source) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            return Ok(CopyOutcome::SourceVanished);
        }
        Err(error) => return Err(ReconcileError::io("open source file", source, error)),
    };
    let metadata = reader
        .metadata()
        .map_err(|error| ReconcileError::io("inspect source file", source, error))?;

    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempfile_in(parent)
        .map_err(|error| ReconcileError::io("create staging file in", parent, error))?;

    io::copy(&mut reader, staged.as_file_mut())
        .map_err(|error| ReconcileError::io("copy file", source, error))?;
    fs::set_permissions(staged.path(), metadata.permissions())
        .map_err(|error| ReconcileError::io("preserve permissions", destination, error))?;
    if options.preserves_times() {
        set_timestamp_like(&metadata, staged.path())
            .map_err(|error| ReconcileError::io("preserve timestamps", destination, error))?;
    }

    staged
        .persist(destination)
        .map_err(|error| ReconcileError::io("rename staging file to", destination, error.error))?;
    Ok(CopyOutcome::Copied)
}

fn set_timestamp_like(metadata: &fs::Metadata, destination: &Path) -> io::Result<()> {
    let accessed = FileTime::from_last_access_time(metadata);
    let modified = FileTime::from_last_modification_time(metadata);
    set_file_times(destination, accessed, modified)
}
