use thiserror::Error;

pub type CommandResult<T> = Result<T, GreeterError>;

/// Exit code used when the greeting could not be written.
pub const OUTPUT_FAILURE_CODE: i32 = 1;

#[derive(Debug, Error)]
pub enum GreeterError {
    /// The argument vector was rejected, or help/version output was requested.
    #[error(transparent)]
    Arguments(#[from] clap::Error),
    #[error("failed to write greeting")]
    Output(#[from] std::io::Error),
}

impl GreeterError {
    /// Process exit code for this error. Argument errors follow clap's convention.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(err) => err.exit_code(),
            Self::Output(_) => OUTPUT_FAILURE_CODE,
        }
    }
}
