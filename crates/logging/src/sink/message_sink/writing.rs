use super::MessageSink;
use crate::record::LogRecord;
use std::io::{self, Write};

impl<W> MessageSink<W>
where
    W: Write,
{
    /// Writes `record` as one newline-terminated line and flushes the writer.
    pub fn write(&mut self, record: &LogRecord) -> io::Result<()> {
        let mut line = record.render(self.severity_field);
        line.push('\n');
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }
}
