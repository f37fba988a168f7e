//! Core tool trait and invocation types.

use memsh_types::{ExecResult, ShellError};

use crate::session::Session;

/// Schema describing a command's interface, used by `help` and for
/// wrong-arity messages.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Command name (used for lookup).
    pub name: String,
    /// Short description.
    pub description: String,
    /// Usage string shown in `Bad Usage!` lines and `help`.
    pub usage: String,
}

impl ToolSchema {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        usage: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usage: usage.into(),
        }
    }
}

/// One tokenized command line, ready for execution.
#[derive(Debug, Clone, Default)]
pub struct Invocation {
    /// Positional arguments after the command name.
    pub args: Vec<String>,
    /// The raw input line; `insert` extracts its `#` content from here.
    pub raw: String,
}

impl Invocation {
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

/// A command that can be executed against a session.
pub trait Tool {
    /// The command's name (used for lookup).
    fn name(&self) -> &str;

    /// Get the command's schema.
    fn schema(&self) -> ToolSchema;

    /// Execute with the given invocation and session.
    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult;
}

/// Standard wrong-arity failure: a usage hint line followed by the
/// invalid-arguments status line.
pub fn bad_usage(schema: &ToolSchema) -> ExecResult {
    ExecResult::failure_with_notice(
        ShellError::InvalidArguments,
        format!("Bad Usage! The right way is: {}", schema.usage),
    )
}
