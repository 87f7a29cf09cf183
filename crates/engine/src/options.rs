/// Options that influence how a [`Reconciler`](crate::Reconciler) mirrors files.
///
/// ```
/// use engine::MirrorOptions;
///
/// let options = MirrorOptions::default().verify_copies(true);
/// assert!(options.verifies_copies());
/// assert!(options.preserves_times());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MirrorOptions {
    verify_copies: bool,
    preserve_times: bool,
}

impl MirrorOptions {
    /// Creates the default option set: timestamps preserved, no verification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_copies: false,
            preserve_times: true,
        }
    }

    /// Re-fingerprints every copied file and reports mismatches.
    #[must_use]
    #[doc(alias = "--verify")]
    pub const fn verify_copies(mut self, verify: bool) -> Self {
        self.verify_copies = verify;
        self
    }

    /// Copies access and modification times onto replica files.
    #[must_use]
    pub const fn preserve_times(mut self, preserve: bool) -> Self {
        self.preserve_times = preserve;
        self
    }

    /// Reports whether copies are verified.
    #[must_use]
    pub const fn verifies_copies(&self) -> bool {
        self.verify_copies
    }

    /// Reports whether timestamps are preserved.
    #[must_use]
    pub const fn preserves_times(&self) -> bool {
        self.preserve_times
    }
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self::new()
    }
}
