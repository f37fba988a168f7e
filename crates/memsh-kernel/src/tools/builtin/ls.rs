//! ls — List the current directory.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Ls tool: list the current directory's entries.
pub struct Ls;

impl Tool for Ls {
    fn name(&self) -> &str {
        "ls"
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new("ls", "List the current directory", "ls")
    }

    fn execute(&self, inv: &Invocation, session: &mut Session) -> ExecResult {
        if !inv.args.is_empty() {
            return bad_usage(&self.schema());
        }
        let tree = session.tree();
        let mut lines = Vec::new();
        for &child in tree.node(session.cwd()).children() {
            let node = tree.node(child);
            let prefix = if node.is_dir() { '>' } else { '-' };
            lines.push(format!(
                "{}{} {} {}",
                prefix,
                node.name(),
                node.subtree_size(),
                node.creator().label()
            ));
        }
        ExecResult::success(lines.join("\n"))
    }
}
