use std::fs::{File, OpenOptions};
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;

use logging::{Logger, MessageSink, SharedSink};

/// Opens `path` for appending, creating it when absent. Existing content is
/// never truncated.
pub(crate) fn open_log_file(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(0o666);
    }
    options.open(path)
}

/// Builds the operator log: the file sink carries the severity field, the
/// console sink does not.
pub(crate) fn operator_log<Out>(log_file: File, console: Out) -> Logger
where
    Out: Write + Send + 'static,
{
    Logger::new()
        .with_sink(SharedSink::new(MessageSink::new(log_file)))
        .with_sink(SharedSink::new(MessageSink::without_severity(console)))
}
