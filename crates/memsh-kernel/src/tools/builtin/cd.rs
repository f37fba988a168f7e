//! cd — Change the current directory.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Cd tool: change directory by name, `..`, or absolute path.
pub struct Cd;

impl Tool for Cd {
    fn name(&self) -> &str {
        "cd"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("cd", "Change the current directory", "cd dirName")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [target] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.change_dir(target) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
