/// Counters describing what one reconciliation cycle did.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CycleSummary {
    replica_root_created: bool,
    directories_created: u64,
    files_copied: u64,
    files_updated: u64,
    files_removed: u64,
    directories_removed: u64,
    files_skipped: u64,
    verification_failures: u64,
}

impl CycleSummary {
    /// Reports whether the replica root had to be created.
    #[must_use]
    pub const fn replica_root_created(&self) -> bool {
        self.replica_root_created
    }

    /// Directories created below the replica root.
    #[must_use]
    pub const fn directories_created(&self) -> u64 {
        self.directories_created
    }

    /// Files copied because the replica had no counterpart.
    #[must_use]
    pub const fn files_copied(&self) -> u64 {
        self.files_copied
    }

    /// Files overwritten because their content differed.
    #[must_use]
    pub const fn files_updated(&self) -> u64 {
        self.files_updated
    }

    /// Non-directory replica entries removed.
    #[must_use]
    pub const fn files_removed(&self) -> u64 {
        self.files_removed
    }

    /// Replica directories removed.
    #[must_use]
    pub const fn directories_removed(&self) -> u64 {
        self.directories_removed
    }

    /// Files left alone because a fingerprint or copy source was unavailable.
    #[must_use]
    pub const fn files_skipped(&self) -> u64 {
        self.files_skipped
    }

    /// Copies whose replica fingerprint did not match the source.
    #[must_use]
    pub const fn verification_failures(&self) -> u64 {
        self.verification_failures
    }

    /// Reports whether the cycle left the replica untouched.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        !self.replica_root_created
            && self.directories_created == 0
            && self.files_copied == 0
            && self.files_updated == 0
            && self.files_removed == 0
            && self.directories_removed == 0
    }

    /// Adds another cycle's counters to this one.
    pub fn merge(&mut self, other: &Self) {
        self.replica_root_created |= other.replica_root_created;
        self.directories_created += other.directories_created;
        self.files_copied += other.files_copied;
        self.files_updated += other.files_updated;
        self.files_removed += other.files_removed;
        self.directories_removed += other.directories_removed;
        self.files_skipped += other.files_skipped;
        self.verification_failures += other.verification_failures;
    }

    pub(crate) fn record_replica_root_created(&mut self) {
        self.replica_root_created = true;
    }

    pub(crate) fn record_directory_created(&mut self) {
        self.directories_created += 1;
    }

    pub(crate) fn record_file_copied(&mut self) {
        self.files_copied += 1;
    }

    pub(crate) fn record_file_updated(&mut self) {
        self.files_updated += 1;
    }

    pub(crate) fn record_file_removed(&mut self) {
        self.files_removed += 1;
    }

    pub(crate) fn record_directory_removed(&mut self) {
        self.directories_removed += 1;
    }

    pub(crate) fn record_file_skipped(&mut self) {
        self.files_skipped += 1;
    }

    pub(crate) fn record_verification_failure(&mut self) {
        self.verification_failures += 1;
    }
}
