use std::fmt;

/// Importance of an event written to the operator log.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Severity {
    /// Routine progress: copies, removals, cycle completion.
    Info,
    /// Unexpected but harmless conditions.
    Warning,
    /// Failures. Per-file failures are logged and skipped, structural ones
    /// abort the cycle.
    Error,
}

impl Severity {
    /// Returns the upper-case label written into the severity field.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::Warning.as_str(), "WARNING");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
