use crate::catalog::Catalog;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Conventional exit code type used by menu commands.
///
/// A value of 0 indicates success; any non-zero value indicates that the
/// command reported a problem to the user. No code is fatal to the session;
/// the interactive loop keeps running either way.
pub type ExitCode = i32;

/// Object-safe trait for any action the menu can execute.
///
/// Commands read follow-up input (a filename, a course identifier) from
/// `input` and write everything user-visible to `output`, so tests can drive
/// them with in-memory buffers instead of the real console. The catalog is
/// the only mutable session state.
pub trait ExecutableCommand {
    /// Executes the command against the session's catalog.
    fn execute(
        self: Box<Self>,
        input: &mut dyn BufRead,
        output: &mut dyn Write,
        catalog: &mut Catalog,
    ) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a numeric menu choice.
///
/// Returns `None` when the factory doesn't recognize the `choice`, letting
/// the interpreter fall through to the next registered factory.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided menu choice.
    fn try_create(&self, choice: u32) -> Option<Box<dyn ExecutableCommand>>;
}
