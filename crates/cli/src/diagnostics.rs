use std::io;

use tracing_subscriber::EnvFilter;

/// Installs the developer diagnostics subscriber.
///
/// Output goes to stderr and is filtered by `RUST_LOG`; without it nothing is
/// emitted. Operator events never pass through here. Installing twice is a
/// no-op.
pub(crate) fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(true)
        .try_init();
}
