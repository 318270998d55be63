use super::Invocation;
use crate::error::CommandResult;

pub const GREETING_PREFIX: &str = "Hello";
pub const DEFAULT_GREETING: &str = "World!";

/// Returns the greeting message for the provided invocation.
pub fn message(invocation: &Invocation) -> CommandResult<String> {
    Ok(format!("{GREETING_PREFIX} {}", invocation.greeting()))
}
