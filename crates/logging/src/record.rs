use std::borrow::Cow;

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::severity::Severity;

/// Timestamp layout used at the start of every log line, e.g.
/// `2024-03-01 14:05:09,042`.
pub const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero],[subsecond digits:3]"
);

const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00,000";

/// Whether a rendered line carries the severity label.
///
/// The log file keeps the level so errors can be grepped for; the console
/// omits it to keep interactive output short.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SeverityField {
    /// `<timestamp> - <LEVEL> - <message>`
    #[default]
    Include,
    /// `<timestamp> - <message>`
    Omit,
}

/// A single event destined for the operator log.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogRecord {
    timestamp: OffsetDateTime,
    severity: Severity,
    message: String,
}

impl LogRecord {
    /// Creates a record stamped with the current local time.
    ///
    /// Falls back to UTC when the local offset cannot be determined, which is
    /// the case on some Unix platforms once additional threads are running.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        Self::at(now, severity, message)
    }

    /// Creates a record with an explicit timestamp.
    pub fn at(timestamp: OffsetDateTime, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            severity,
            message: message.into(),
        }
    }

    /// Returns the time at which the event was recorded.
    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the record as a single line without a trailing newline.
    ///
    /// Control characters in the message, such as a newline inside a file
    /// name, are written as escapes (`\n`).
    #[must_use]
    pub fn render(&self, field: SeverityField) -> String {
        let timestamp = self
            .timestamp
            .format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_string());
        let message = escape_controls(&self.message);
        match field {
            SeverityField::Include => {
                format!("{timestamp} - {} - {message}", self.severity)
            }
            SeverityField::Omit => format!("{timestamp} - {message}"),
        }
    }
}

fn escape_controls(message: &str) -> Cow<'_, str> {
    if !message.chars().any(char::is_control) {
        return Cow::Borrowed(message);
    }
    let mut escaped = String::with_capacity(message.len() + 8);
    for ch in message.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}
