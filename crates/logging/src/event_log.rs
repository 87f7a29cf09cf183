use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use crate::record::LogRecord;
use crate::severity::Severity;

/// Capability for recording operator-facing events.
///
/// Implementations must tolerate concurrent callers and must never panic on
/// write failures.
pub trait EventLog: Send + Sync {
    /// Records a fully formed event.
    fn record(&self, record: LogRecord);

    /// Records an informational event stamped with the current time.
    fn info(&self, message: &str) {
        self.record(LogRecord::new(Severity::Info, message));
    }

    /// Records a warning stamped with the current time.
    fn warning(&self, message: &str) {
        self.record(LogRecord::new(Severity::Warning, message));
    }

    /// Records an error stamped with the current time.
    fn error(&self, message: &str) {
        self.record(LogRecord::new(Severity::Error, message));
    }
}

impl<T> EventLog for Arc<T>
where
    T: EventLog + ?Sized,
{
    fn record(&self, record: LogRecord) {
        (**self).record(record);
    }
}

impl<T> EventLog for &T
where
    T: EventLog + ?Sized,
{
    fn record(&self, record: LogRecord) {
        (**self).record(record);
    }
}

/// Fans every record out to a list of sinks.
///
/// All sinks receive the same [`LogRecord`], so the file and console lines for
/// one event carry identical timestamps.
#[derive(Default)]
pub struct Logger {
    sinks: Vec<Box<dyn EventLog>>,
}

impl Logger {
    /// Creates a logger without sinks. Records are discarded until a sink is added.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sink and returns the logger for chaining.
    #[must_use]
    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: EventLog + 'static,
    {
        self.add_sink(sink);
        self
    }

    /// Adds a sink in place.
    pub fn add_sink<S>(&mut self, sink: S)
    where
        S: EventLog + 'static,
    {
        self.sinks.push(Box::new(sink));
    }

    /// Number of attached sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}

impl EventLog for Logger {
    fn record(&self, record: LogRecord) {
        if let Some((last, rest)) = self.sinks.split_last() {
            for sink in rest {
                sink.record(record.clone());
            }
            last.record(record);
        }
    }
}

/// In-memory event log used to assert on emitted events.
///
/// ```
/// use logging::{EventLog, MemoryLog};
///
/// let log = MemoryLog::new();
/// log.info("File removed: stale.txt");
/// assert_eq!(log.messages(), vec!["File removed: stale.txt".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLog {
    records: Mutex<Vec<LogRecord>>,
}

impl MemoryLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every record captured so far.
    #[must_use]
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the message text of every captured record, in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|record| record.message().to_string())
            .collect()
    }

    /// Removes and returns all captured records.
    pub fn take(&self) -> Vec<LogRecord> {
        std::mem::take(&mut *self.records.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl EventLog for MemoryLog {
    fn record(&self, record: LogRecord) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MessageSink, SharedSink};

    #[test]
    fn logger_without_sinks_discards_records() {
        let logger = Logger::new();
        logger.info("ignored");
        assert_eq!(logger.sink_count(), 0);
    }

    #[test]
    fn logger_fans_out_with_identical_records() {
        let first = Arc::new(MemoryLog::new());
        let second = Arc::new(MemoryLog::new());
        let logger = Logger::new()
            .with_sink(Arc::clone(&first))
            .with_sink(Arc::clone(&second));

        logger.error("MD5 calculation failed: file not found: /tmp/x");

        let a = first.records();
        let b = second.records();
        assert_eq!(a.len(), 1);
        assert_eq!(a, b);
        assert_eq!(a[0].severity(), Severity::Error);
    }

    #[test]
    fn file_and_console_layouts_differ_only_in_severity() {
        let file = Arc::new(SharedSink::new(MessageSink::new(Vec::new())));
        let console = Arc::new(SharedSink::new(MessageSink::without_severity(Vec::new())));
        let logger = Logger::new()
            .with_sink(Arc::clone(&file))
            .with_sink(Arc::clone(&console));

        logger.info("Synchronization completed");
        drop(logger);

        let file = Arc::try_unwrap(file).expect("sole owner").into_inner();
        let console = Arc::try_unwrap(console).expect("sole owner").into_inner();
        let file_line = String::from_utf8(file.into_inner()).expect("utf8");
        let console_line = String::from_utf8(console.into_inner()).expect("utf8");

        assert_eq!(file_line.replacen(" - INFO", "", 1), console_line);
    }

    #[test]
    fn memory_log_take_drains_records() {
        let log = MemoryLog::new();
        log.warning("first");
        log.info("second");
        assert_eq!(log.take().len(), 2);
        assert!(log.records().is_empty());
    }

    #[test]
    fn arc_dyn_event_log_forwards() {
        let memory = Arc::new(MemoryLog::new());
        let shared: Arc<dyn EventLog> = memory.clone();
        shared.info("via trait object");
        assert_eq!(memory.messages(), vec!["via trait object".to_string()]);
    }
}
