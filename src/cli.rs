use std::ffi::OsString;

use clap::Parser;

use crate::commands::{greet::DEFAULT_GREETING, Invocation};
use crate::error::CommandResult;

/// Program name, fixed at build time through `GREETER_PROGRAM_NAME`.
pub const PROGRAM_NAME: &str = env!("GREETER_PROGRAM_NAME");

pub const ABOUT: &str = concat!(
    env!("GREETER_PROGRAM_NAME"),
    " prints a greeting to standard output."
);

/// Command-line arguments for the greeter.
#[derive(Debug, Parser)]
#[command(
    name = PROGRAM_NAME,
    bin_name = PROGRAM_NAME,
    version,
    about = ABOUT,
    long_about = None
)]
pub struct Args {
    /// The greeting to print.
    #[arg(value_name = "GREETING", default_value = DEFAULT_GREETING)]
    pub greeting: String,
}

impl From<Args> for Invocation {
    fn from(args: Args) -> Self {
        Self::new(args.greeting)
    }
}

/// Maps a raw argument vector (including the binary name) to an
/// [`Invocation`].
///
/// Help and version requests come back as [`crate::error::GreeterError::Arguments`]
/// with exit code `0`, like any other outcome that stops before the greeting.
pub fn parse_from<I, T>(argv: I) -> CommandResult<Invocation>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = Args::try_parse_from(argv)?;
    Ok(args.into())
}
