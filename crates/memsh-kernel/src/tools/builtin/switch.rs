//! switch — Toggle between Casual and Superuser.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Switch tool: enter Superuser with the shared secret, or drop back.
pub struct Switch;

impl Tool for Switch {
    fn name(&self) -> &str {
        "switch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "switch",
            "Switch principal (password needed only when Casual)",
            "switch [password]",
        )
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let outcome = match (session.principal().is_superuser(), inv.args.as_slice()) {
            (true, []) => session.switch(None),
            (false, [password]) => session.switch(Some(password.as_str())),
            _ => return bad_usage(&self.schema()),
        };
        match outcome {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
