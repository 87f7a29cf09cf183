#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the command-line front-end of `dirmirror`:
//!
//! ```text
//! dirmirror <SOURCE> <REPLICA> <INTERVAL> <LOG_FILE> [--once] [--verify]
//! ```
//!
//! It parses the arguments, opens the log file in append mode, builds the
//! operator log (file lines carry the severity, console lines do not), wires
//! SIGINT and SIGTERM to the scheduler's stop handle and runs the mirror loop
//! until stopped.
//!
//! # Design
//!
//! [`run`] accepts an argument iterator, an owned standard output handle and
//! a borrowed standard error handle, and returns the process exit code. The
//! console sink owns standard output for the lifetime of the run; usage errors
//! go to standard error.
//!
//! # Exit codes
//!
//! - [`SUCCESS_EXIT_CODE`] after a signal or a completed `--once` run;
//! - [`USAGE_EXIT_CODE`] for invalid arguments or an unusable log file;
//! - [`SYNC_FAILURE_EXIT_CODE`] when a cycle fails structurally, after
//!   `Synchronization failed: <error>` has been logged.
//!
//! # Examples
//!
//! ```
//! let mut stderr = Vec::new();
//! let exit_code = cli::run(["dirmirror", "src", "dst", "0", "sync.log"], Vec::new(), &mut stderr);
//!
//! assert_eq!(exit_code, cli::USAGE_EXIT_CODE);
//! assert!(String::from_utf8_lossy(&stderr).contains("positive whole number"));
//! ```

mod args;
mod command;
mod diagnostics;
mod error;
mod signals;
mod sinks;

use std::ffi::OsString;
use std::io::Write;
use std::num::NonZeroU64;
use std::process::ExitCode;
use std::sync::Arc;

use clap::error::ErrorKind;
use engine::{MirrorOptions, Reconciler};
use logging::EventLog;
use scheduler::{Scheduler, StopSignal};

pub use args::{MirrorArgs, parse_args};
pub use error::{CliError, SUCCESS_EXIT_CODE, SYNC_FAILURE_EXIT_CODE, USAGE_EXIT_CODE};

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit code.
pub fn run<I, S, Out, Err>(arguments: I, stdout: Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write + Send + 'static,
    Err: Write,
{
    let mut stdout = stdout;
    let args = match parse_args(arguments) {
        Ok(args) => args,
        Err(error) if matches!(error.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(stdout, "{}", error.render());
            let _ = stdout.flush();
            return SUCCESS_EXIT_CODE;
        }
        Err(error) => {
            let error = CliError::from(error);
            let _ = write!(stderr, "{error}");
            return error.exit_code();
        }
    };

    diagnostics::init_tracing();
    match execute(&args, stdout) {
        Ok(()) => SUCCESS_EXIT_CODE,
        Err(error @ CliError::Sync(_)) => error.exit_code(),
        Err(error) => {
            let _ = writeln!(stderr, "dirmirror: {error}");
            error.exit_code()
        }
    }
}

/// Converts a numeric exit code into an [`ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> ExitCode {
    u8::try_from(status).map_or(ExitCode::FAILURE, ExitCode::from)
}

fn execute<Out>(args: &MirrorArgs, stdout: Out) -> Result<(), CliError>
where
    Out: Write + Send + 'static,
{
    let log_file = sinks::open_log_file(&args.log_file).map_err(|source| CliError::LogFile {
        path: args.log_file.clone(),
        source,
    })?;
    let log: Arc<dyn EventLog> = Arc::new(sinks::operator_log(log_file, stdout));

    log.info("Synchronization started");
    log.info(&format!("Source folder: {}", args.source.display()));
    log.info(&format!("Replica folder: {}", args.replica.display()));
    log.info(&format!("Synchronization interval: {} seconds", args.interval));
    log.info(&format!("Log file: {}", args.log_file.display()));

    let stop = StopSignal::new();
    let _forwarder = match signals::forward_stop_signals(stop.handle()) {
        Ok(forwarder) => Some(forwarder),
        Err(error) => {
            log.warning(&format!("Signal handling unavailable: {error}"));
            None
        }
    };

    let options = MirrorOptions::default().verify_copies(args.verify);
    let reconciler = Reconciler::with_options(Arc::clone(&log), options);
    let scheduler = Scheduler::every_secs(args.interval)
        .max_cycles(args.once.then_some(NonZeroU64::MIN));

    match scheduler.run_reconciler(&reconciler, &args.source, &args.replica, &stop) {
        Ok(_) => {
            log.info("Synchronization stopped");
            Ok(())
        }
        Err(error) => {
            let error = CliError::from(error);
            log.error(&error.to_string());
            Err(error)
        }
    }
}
