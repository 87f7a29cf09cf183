use std::io;
use std::path::Path;
use std::sync::Arc;

use logging::EventLog;

use crate::fingerprint::Fingerprint;

/// Computes fingerprints for files on disk, logging failures.
///
/// A `None` result means the file's identity could not be confirmed, usually
/// because it vanished between directory listing and hashing. Callers treat
/// that as "skip for this cycle", never as a fatal condition.
#[derive(Clone)]
pub struct ContentFingerprinter {
    log: Arc<dyn EventLog>,
}

impl ContentFingerprinter {
    /// Creates a fingerprinter that reports failures to `log`.
    pub fn new(log: Arc<dyn EventLog>) -> Self {
        Self { log }
    }

    /// Fingerprints the file at `path`.
    pub fn digest(&self, path: &Path) -> Option<Fingerprint> {
        match Fingerprint::from_file(path) {
            Ok(fingerprint) => Some(fingerprint),
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                self.log.error(&format!(
                    "MD5 calculation failed: file not found: {}",
                    path.display()
                ));
                None
            }
            Err(error) => {
                self.log.error(&format!(
                    "MD5 calculation failed for {}: {error}",
                    path.display()
                ));
                None
            }
        }
    }
}

impl std::fmt::Debug for ContentFingerprinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFingerprinter").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{MemoryLog, Severity};
    use std::fs;

    #[test]
    fn digest_of_existing_file_logs_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("a.txt");
        fs::write(&path, b"hello").expect("write");

        let log = Arc::new(MemoryLog::new());
        let fingerprinter = ContentFingerprinter::new(log.clone());

        assert_eq!(fingerprinter.digest(&path), Some(Fingerprint::of(b"hello")));
        assert!(log.records().is_empty());
    }

    #[test]
    fn missing_file_yields_none_and_logs_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("vanished.txt");

        let log = Arc::new(MemoryLog::new());
        let fingerprinter = ContentFingerprinter::new(log.clone());

        assert_eq!(fingerprinter.digest(&path), None);
        let records = log.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity(), Severity::Error);
        assert!(records[0].message().starts_with("MD5 calculation failed: file not found"));
        assert!(records[0].message().ends_with("vanished.txt"));
    }

    #[test]
    fn directory_path_yields_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let log = Arc::new(MemoryLog::new());
        let fingerprinter = ContentFingerprinter::new(log.clone());

        assert_eq!(fingerprinter.digest(temp.path()), None);
        assert_eq!(log.records().len(), 1);
    }
}
