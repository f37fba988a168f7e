//! touch — Create an empty file in the current directory.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Touch tool: create an empty file.
pub struct Touch;

impl Tool for Touch {
    fn name(&self) -> &str {
        "touch"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("touch", "Create an empty file", "touch fileName")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let [name] = inv.args.as_slice() else {
            return bad_usage(&self.schema());
        };
        match session.make_file(name) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
