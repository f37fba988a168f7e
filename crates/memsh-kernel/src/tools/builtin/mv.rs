//! move — Relocate a subtree under another directory.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Move tool: relink a file or directory under a new parent.
pub struct Move;

impl Tool for Move {
    fn name(&self) -> &str {
        "move"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "move",
            "Move a file or directory into another directory",
            "move source destination",
        )
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [source, dest] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.move_target(source, dest) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
