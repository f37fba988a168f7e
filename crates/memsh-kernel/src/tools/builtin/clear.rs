//! clear — Clear the terminal screen.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// ANSI erase-display plus cursor-home.
const CLEAR_SEQUENCE: &str = "\x1b[2J\x1b[H";

/// Clear tool: emit the ANSI clear sequence.
pub struct Clear;

impl Tool for Clear {
    fn name(&self) -> &str {
        "clear"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("clear", "Clear the screen", "clear")
    }

    fn execute(&self, inv: &Invocation, _session: &mut Session) -> ExecResult {
        if !inv.args.is_empty() {
            return bad_usage(&self.schema());
        }
        ExecResult::success(CLEAR_SEQUENCE)
    }
}
