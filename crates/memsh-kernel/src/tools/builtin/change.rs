//! change — Replace the shared superuser secret.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Change tool: set a new superuser password.
pub struct Change;

impl Tool for Change {
    fn name(&self) -> &str {
        "change"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "change",
            "Change the superuser password (Superuser only)",
            "change newPassword",
        )
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [new_secret] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.change_secret(new_secret) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
