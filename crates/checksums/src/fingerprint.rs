use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::strong::Md5;

/// Number of bytes read from a file per hashing step.
pub const CHUNK_SIZE: usize = 4096;

/// Content-derived 128-bit digest of a file.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Fingerprint([u8; Md5::DIGEST_LEN]);

impl Fingerprint {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; Md5::DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Fingerprints an in-memory buffer.
    #[must_use]
    pub fn of(data: &[u8]) -> Self {
        Self(Md5::digest(data))
    }

    /// Streams `reader` to the end in [`CHUNK_SIZE`] blocks.
    ///
    /// Interrupted reads are retried; any other error aborts the computation.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Md5::new();
        let mut buffer = [0_u8; CHUNK_SIZE];
        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => hasher.update(&buffer[..read]),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => {}
                Err(error) => return Err(error),
            }
        }
        Ok(Self(hasher.finalize()))
    }

    /// Opens `path` and fingerprints its contents.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; Md5::DIGEST_LEN] {
        &self.0
    }

    /// Renders the digest as 32 lowercase hexadecimal digits.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}
