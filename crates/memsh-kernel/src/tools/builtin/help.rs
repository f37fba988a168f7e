//! help — List every command with its usage line.

use memsh_types::ExecResult;

use crate::session::Session;
use crate::tools::{bad_usage, Invocation, Tool, ToolSchema};

/// Help tool: prints the usage table for all registered commands.
///
/// Built last during registration so it can capture the schemas of
/// everything registered before it, plus its own.
pub struct Help {
    schemas: Vec<ToolSchema>,
}

impl Help {
    pub fn new(mut schemas: Vec<ToolSchema>) -> Self {
        schemas.push(Self::own_schema());
        Help { schemas }
    }

    fn own_schema() -> ToolSchema {
        ToolSchema::new("help", "List all commands", "help")
    }
}

impl Tool for Help {
    fn name(&self) -> &str {
        "help"
    }

    fn schema(&self) -> ToolSchema {
        Self::own_schema()
    }

    fn execute(&self, inv: &Invocation, _session: &mut Session) -> ExecResult {
        if !inv.args.is_empty() {
            return bad_usage(&self.schema());
        }
        let width = self
            .schemas
            .iter()
            .map(|s| s.usage.len())
            .max()
            .unwrap_or(0);
        let mut lines = Vec::with_capacity(self.schemas.len());
        for schema in &self.schemas {
            lines.push(format!(
                "  {:<width$}  {}",
                schema.usage, schema.description
            ));
        }
        ExecResult::success(lines.join("\n"))
    }
}
