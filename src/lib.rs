use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::Context;

pub mod cli;
pub mod commands;
pub mod error;

use crate::error::GreeterError;

pub type Result<T> = anyhow::Result<T>;

/// Entry point used by the binary crate. Returns the process exit code.
pub fn run<I, T>(argv: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(argv, &mut out)
}

/// Runs one invocation, writing the greeting (or help/version text) to `out`.
///
/// Argument diagnostics go to standard error.
pub fn run_with<I, T, W>(argv: I, out: &mut W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    init_tracing();

    match greet(argv, out) {
        Ok(()) => 0,
        Err(err) => report(&err, out),
    }
}

fn greet<I, T, W>(argv: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write + ?Sized,
{
    let invocation = cli::parse_from(argv)?;
    tracing::debug!(?invocation, "parsed arguments");

    let message = commands::execute(&invocation)?;
    writeln!(out, "{message}")
        .and_then(|()| out.flush())
        .map_err(GreeterError::from)
        .context("failed to write to standard output")?;
    Ok(())
}

fn report<W>(err: &anyhow::Error, out: &mut W) -> i32
where
    W: Write + ?Sized,
{
    let Some(GreeterError::Arguments(parse_err)) = err.downcast_ref::<GreeterError>() else {
        eprintln!("Error: {err:?}");
        return error::OUTPUT_FAILURE_CODE;
    };

    if parse_err.use_stderr() {
        if let Err(io_err) = parse_err.print() {
            tracing::warn!(error = %io_err, "failed to write argument diagnostic");
        }
    } else if let Err(io_err) = write!(out, "{}", parse_err.render()) {
        tracing::warn!(error = %io_err, "failed to write help output");
        return GreeterError::Output(io_err).exit_code();
    }
    parse_err.exit_code()
}

fn init_tracing() {
    use std::sync::Once;
    use tracing_subscriber::{fmt, EnvFilter};

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
