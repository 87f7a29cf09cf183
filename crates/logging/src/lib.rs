#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the operator-facing event log used by every dirmirror
//! component. Events are timestamped, carry a [`Severity`], and are written one
//! per line to any number of sinks. The binary wires two sinks: an append-mode
//! log file that includes the severity field and a console sink that omits it.
//!
//! # Design
//!
//! - [`EventLog`] is the logging capability. Components receive an
//!   `Arc<dyn EventLog>` at construction time instead of reaching for a
//!   process-wide registry.
//! - [`MessageSink`] renders [`LogRecord`] values into an [`std::io::Write`]
//!   target according to a [`SeverityField`] policy.
//! - [`SharedSink`] places a [`MessageSink`] behind a mutex so it can be used as
//!   an [`EventLog`].
//! - [`Logger`] fans a record out to several sinks with a single timestamp.
//! - [`MemoryLog`] captures records in memory for assertions in tests.
//!
//! # Invariants
//!
//! - Every record is rendered on exactly one line; control characters in the
//!   message are written as escapes.
//! - Write failures are swallowed: logging never aborts a synchronization cycle.
//!
//! # Examples
//!
//! ```
//! use logging::{EventLog, LogRecord, MessageSink, Severity, SharedSink};
//!
//! let sink = SharedSink::new(MessageSink::new(Vec::new()));
//! sink.record(LogRecord::new(Severity::Info, "Synchronization completed"));
//!
//! let output = String::from_utf8(sink.into_inner().into_inner()).unwrap();
//! assert!(output.ends_with(" - INFO - Synchronization completed\n"));
//! ```

mod event_log;
mod record;
mod severity;
mod sink;

pub use event_log::{EventLog, Logger, MemoryLog};
pub use record::{LogRecord, SeverityField, TIMESTAMP_FORMAT};
pub use severity::Severity;
pub use sink::{MessageSink, SharedSink};
