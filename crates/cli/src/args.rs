use std::ffi::OsString;
use std::num::NonZeroU64;
use std::path::PathBuf;

use crate::command::clap_command;

/// Parsed command-line arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorArgs {
    /// Directory to mirror from.
    pub source: PathBuf,
    /// Directory kept identical to the source.
    pub replica: PathBuf,
    /// Pause between the end of one cycle and the start of the next.
    pub interval: NonZeroU64,
    /// File that events are appended to.
    pub log_file: PathBuf,
    /// Run one cycle and exit.
    pub once: bool,
    /// Re-fingerprint copied files.
    pub verify: bool,
}

/// Parses command-line arguments into [`MirrorArgs`].
///
/// `--help` and `--version` surface as a [`clap::Error`] whose kind is
/// [`clap::error::ErrorKind::DisplayHelp`] or
/// [`clap::error::ErrorKind::DisplayVersion`].
pub fn parse_args<I, S>(arguments: I) -> Result<MirrorArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from("dirmirror"));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let source = matches.remove_one::<PathBuf>("source").unwrap_or_default();
    let replica = matches.remove_one::<PathBuf>("replica").unwrap_or_default();
    let log_file = matches.remove_one::<PathBuf>("log_file").unwrap_or_default();
    let interval = matches
        .remove_one::<NonZeroU64>("interval")
        .unwrap_or(NonZeroU64::MIN);
    let once = matches.get_flag("once");
    let verify = matches.get_flag("verify");

    Ok(MirrorArgs {
        source,
        replica,
        interval,
        log_file,
        once,
        verify,
    })
}
