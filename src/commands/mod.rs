pub mod greet;

use crate::error::CommandResult;

/// A single run of the program, built from the parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    greeting: String,
}

impl Invocation {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            greeting: greeting.into(),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

impl Default for Invocation {
    fn default() -> Self {
        Self::new(greet::DEFAULT_GREETING)
    }
}

/// Dispatches execution to the appropriate command handler.
pub fn execute(invocation: &Invocation) -> CommandResult<String> {
    tracing::debug!(greeting = invocation.greeting(), "dispatching greet command");
    greet::message(invocation)
}
