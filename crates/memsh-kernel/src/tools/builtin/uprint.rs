//! uprint — Print the active principal.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Uprint tool: report whether the session is Casual or Superuser.
pub struct Uprint;

impl Tool for Uprint {
    fn name(&self) -> &str {
        "uprint"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("uprint", "Print the current user", "uprint")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        if !inv.args.is_empty() {
            return bad_usage(&self.schema());
        }
        ExecResult::success(session.principal().label())
    }
}
