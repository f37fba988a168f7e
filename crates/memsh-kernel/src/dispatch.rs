//! Line tokenization and command routing.

use memsh_types::{ExecResult, ShellError};

use crate::session::Session;
use crate::tools::{register_builtins, Invocation, ToolRegistry};

/// Maximum tokens read from one line; the rest are dropped with a notice.
pub const MAX_TOKENS: usize = 31;

/// Whitespace-tokenize a line, capped at [`MAX_TOKENS`].
///
/// Returns the tokens and whether the cap was reached.
pub fn tokenize(line: &str) -> (Vec<String>, bool) {
    let mut tokens = Vec::new();
    for token in line.split_whitespace() {
        if tokens.len() == MAX_TOKENS {
            break;
        }
        tokens.push(token.to_string());
    }
    let overflow = tokens.len() == MAX_TOKENS;
    (tokens, overflow)
}

/// Routes tokenized lines to registered tools.
pub struct Dispatcher {
    registry: ToolRegistry,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher with all builtins registered.
    pub fn new() -> Self {
        let mut registry = ToolRegistry::new();
        register_builtins(&mut registry);
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Execute one input line against the session.
    ///
    /// An empty line succeeds quietly. An unknown command name maps to
    /// [`ShellError::CommandNotFound`]. The token-cap notice precedes
    /// whatever the command itself produced.
    pub fn dispatch(&self, line: &str, session: &mut Session) -> ExecResult {
        let (tokens, overflow) = tokenize(line);
        let mut result = match tokens.first() {
            None => ExecResult::success(""),
            Some(command) => match self.registry.get(command) {
                Some(tool) => {
                    tracing::debug!(command = %command, "dispatching");
                    let inv = Invocation {
                        args: tokens[1..].to_vec(),
                        raw: line.to_string(),
                    };
                    tool.execute(&inv, session)
                }
                None => ExecResult::failure(ShellError::CommandNotFound),
            },
        };
        if overflow {
            result.out = if result.out.is_empty() {
                "Too many arguments!".to_string()
            } else {
                format!("Too many arguments!\n{}", result.out)
            };
        }
        result
    }
}
