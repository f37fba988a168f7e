//! Command system for memsh.
//!
//! Every command is a tool implementing the same [`Tool`] trait, looked
//! up by name in a [`ToolRegistry`] and executed against the session.

pub mod builtin;
mod registry;
mod traits;

pub use builtin::register_builtins;
pub use registry::ToolRegistry;
pub use traits::{bad_usage, Invocation, Tool, ToolSchema};
