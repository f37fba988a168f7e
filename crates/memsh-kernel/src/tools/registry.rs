//! Tool registry: name lookup over the registered commands.

use super::traits::{Tool, ToolSchema};

/// Holds every registered command, in registration order.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Later registrations never shadow earlier ones;
    /// builtins register each name exactly once.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        debug_assert!(self.get(tool.name()).is_none());
        self.tools.push(tool);
    }

    /// Look up a tool by command name.
    pub fn get(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .map(|tool| tool.as_ref())
    }

    /// Schemas of every registered tool, in registration order.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        self.tools.iter().map(|tool| tool.schema()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
