use std::num::NonZeroU64;

use clap::builder::PathBufValueParser;
use clap::{Arg, ArgAction, Command};

/// Builds the `clap` command used for parsing.
pub(crate) fn clap_command() -> Command {
    Command::new("dirmirror")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Periodically mirrors a source directory into a replica directory.")
        .arg(
            Arg::new("source")
                .value_name("SOURCE")
                .help("Directory to mirror from.")
                .required(true)
                .value_parser(PathBufValueParser::new()),
        )
        .arg(
            Arg::new("replica")
                .value_name("REPLICA")
                .help("Directory kept identical to SOURCE; created when absent.")
                .required(true)
                .value_parser(PathBufValueParser::new()),
        )
        .arg(
            Arg::new("interval")
                .value_name("INTERVAL")
                .help("Seconds to wait after one cycle finishes before the next starts.")
                .required(true)
                .value_parser(parse_interval),
        )
        .arg(
            Arg::new("log_file")
                .value_name("LOG_FILE")
                .help("File that events are appended to; created when absent.")
                .required(true)
                .value_parser(PathBufValueParser::new()),
        )
        .arg(
            Arg::new("once")
                .long("once")
                .help("Run a single synchronization cycle and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verify")
                .long("verify")
                .help("Re-check every copied file against its source fingerprint.")
                .action(ArgAction::SetTrue),
        )
}

/// Parses a strictly positive whole number of seconds.
fn parse_interval(value: &str) -> Result<NonZeroU64, String> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .and_then(NonZeroU64::new)
        .ok_or_else(|| format!("'{value}' is not a positive whole number of seconds"))
}
