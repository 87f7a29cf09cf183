use super::MessageSink;
use crate::record::SeverityField;

impl<W> MessageSink<W> {
    /// Creates a sink that includes the severity field. This is the log-file
    /// layout.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self::with_severity_field(writer, SeverityField::Include)
    }

    /// Creates a sink that omits the severity field. This is the console layout.
    #[must_use]
    pub fn without_severity(writer: W) -> Self {
        Self::with_severity_field(writer, SeverityField::Omit)
    }

    /// Creates a sink with an explicit [`SeverityField`] policy.
    #[must_use]
    pub const fn with_severity_field(writer: W, severity_field: SeverityField) -> Self {
        Self {
            writer,
            severity_field,
        }
    }

    /// Consumes the sink and returns the wrapped writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
