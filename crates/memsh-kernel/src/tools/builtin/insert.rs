//! insert — Write content into a file.
//!
//! `insert > file #content` overwrites, `insert >> file #content`
//! appends. The content is everything after the first `#` of the raw
//! line, so it may contain spaces that tokenization would have split.

use memsh_types::ExecResult;

use crate::fs::ops::WriteMode;
use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Insert tool: overwrite or append file content.
pub struct Insert;

impl Tool for Insert {
    fn name(&self) -> &str {
        "insert"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new(
            "insert",
            "Write content into a file (> overwrites, >> appends)",
            "insert >|>> fileName #content",
        )
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        let mode = match inv.arg(0) {
            Some(">") => WriteMode::Overwrite,
            Some(">>") => WriteMode::Append,
            _ => return bad_usage(&self.schema()),
        };
        let Some(name) = inv.arg(1) else {
            return bad_usage(&self.schema());
        };
        let Some(marker) = inv.raw.find('#') else {
            return bad_usage(&self.schema());
        };
        let content = &inv.raw[marker + 1..];
        match session.write_file(name, mode, content.as_bytes()) {
            Ok(()) => ExecResult::success(""),
            Err(err) => ExecResult::failure(err),
        }
    }
}
