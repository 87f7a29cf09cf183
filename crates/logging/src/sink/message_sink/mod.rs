use std::fmt;

use crate::record::SeverityField;

/// Streaming sink that renders [`LogRecord`](crate::LogRecord) values into an
/// [`std::io::Write`] target.
///
/// Each call to [`write`](Self::write) renders one record as a single line
/// using the configured [`SeverityField`], then flushes the writer so that a
/// crash between cycles never loses already-reported events.
///
/// # Examples
///
/// Collect records into a [`Vec<u8>`] with newline terminators:
///
/// ```
/// use logging::{LogRecord, MessageSink, Severity};
///
/// let mut sink = MessageSink::new(Vec::new());
/// sink.write(&LogRecord::new(Severity::Info, "Directory created: /replica/sub"))?;
/// sink.write(&LogRecord::new(Severity::Error, "MD5 calculation failed"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert_eq!(output.lines().count(), 2);
/// assert!(output.contains(" - ERROR - MD5 calculation failed"));
/// # Ok::<(), std::io::Error>(())
/// ```
///
/// Console-style output drops the severity label:
///
/// ```
/// use logging::{LogRecord, MessageSink, Severity};
///
/// let mut sink = MessageSink::without_severity(Vec::new());
/// sink.write(&LogRecord::new(Severity::Info, "Synchronization completed"))?;
///
/// let output = String::from_utf8(sink.into_inner()).unwrap();
/// assert!(!output.contains("INFO"));
/// assert!(output.ends_with(" - Synchronization completed\n"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Clone)]
pub struct MessageSink<W> {
    writer: W,
    severity_field: SeverityField,
}

mod constructors;
mod writing;

impl<W> fmt::Debug for MessageSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageSink")
            .field("writer", &self.writer)
            .field("severity_field", &self.severity_field)
            .finish()
    }
}
