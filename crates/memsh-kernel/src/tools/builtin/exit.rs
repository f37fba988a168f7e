//! exit — Leave the shell.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Exit tool: signal the outer loop to stop.
pub struct Exit;

impl Tool for Exit {
    fn name(&self) -> &str {
        "exit"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("exit", "Exit the shell", "exit")
    }

    fn execute(&self, inv: &Invocation, _session: &mut Session) -> ExecResult {
        if !inv.args.is_empty() {
            return bad_usage(&self.schema());
        }
        ExecResult::halt()
    }
}
