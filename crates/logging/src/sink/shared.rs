use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::MessageSink;
use crate::event_log::EventLog;
use crate::record::LogRecord;

/// A [`MessageSink`] behind a mutex, usable as an [`EventLog`].
#[derive(Debug)]
pub struct SharedSink<W> {
    inner: Mutex<MessageSink<W>>,
}

impl<W> SharedSink<W> {
    /// Wraps `sink` for shared use.
    pub fn new(sink: MessageSink<W>) -> Self {
        Self {
            inner: Mutex::new(sink),
        }
    }

    /// Consumes the wrapper and returns the sink.
    pub fn into_inner(self) -> MessageSink<W> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, MessageSink<W>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> EventLog for SharedSink<W>
where
    W: Write + Send,
{
    fn record(&self, record: LogRecord) {
        // A full disk or closed stdout must not stop synchronization.
        let _ = self.lock().write(&record);
    }
}
