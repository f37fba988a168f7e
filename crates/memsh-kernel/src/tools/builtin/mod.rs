//! Builtin commands, one file each.

mod cd;
mod change;
mod clear;
mod exit;
mod help;
mod insert;
mod ls;
mod mkdir;
mod mv;
mod print;
mod rm;
mod switch;
mod touch;
mod uprint;

use super::registry::ToolRegistry;

/// Register every builtin. `help` goes last so it can list the rest.
pub fn register_builtins(registry: &mut ToolRegistry) {
    registry.register(Box::new(ls::Ls));
    registry.register(Box::new(mkdir::Mkdir));
    registry.register(Box::new(cd::Cd));
    registry.register(Box::new(rm::Rm));
    registry.register(Box::new(touch::Touch));
    registry.register(Box::new(mv::Move));
    registry.register(Box::new(insert::Insert));
    registry.register(Box::new(print::Print));
    registry.register(Box::new(switch::Switch));
    registry.register(Box::new(change::Change));
    registry.register(Box::new(uprint::Uprint));
    registry.register(Box::new(clear::Clear));
    registry.register(Box::new(exit::Exit));
    let schemas = registry.schemas();
    registry.register(Box::new(help::Help::new(schemas)));
}
