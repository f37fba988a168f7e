//! rm — Delete a file or directory subtree.
//!
//! Deletion is confirmed interactively unless `-f` is given. The prompt
//! itself lives at the boundary behind the session's confirmation seam;
//! this tool only interprets the reply.

use memsh_types::{ExecResult, ShellError};

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Rm tool: delete a subtree after confirmation.
pub struct Rm;

impl Tool for Rm {
    fn name(&self) -> &str {
        "rm"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("rm", "Delete a file or directory", "rm dir/fileName")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let (force, target) = match inv.args.len() {
            1 if inv.args[0] != "-f" => (false, inv.args[0].as_str()),
            2 if inv.args[0] == "-f" => (true, inv.args[1].as_str()),
            _ => return bad_usage(&self.schema()),
        };

        if !force {
            match session.confirm_delete(target).as_deref() {
                Some("yes") => {}
                Some("no") => return ExecResult::success(""),
                _ => return ExecResult::failure(ShellError::InvalidArguments),
            }
        }

        let id = match session.resolve_delete_target(target) {
            Ok(id) => id,
            Err(err) => return ExecResult::failure(err),
        };
        if id == session.tree().root() {
            return ExecResult::failure_with_notice(
                ShellError::InvalidArguments,
                "Cannot delete root!",
            );
        }
        if session.shields_cwd(id) {
            return ExecResult::failure_with_notice(
                ShellError::InvalidArguments,
                "Cannot delete current working directory!",
            );
        }
        match session.delete_node(id) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
