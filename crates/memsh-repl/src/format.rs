//! Rendering of command results for the terminal.

use memsh_types::ExecResult;

/// Render a result for display: command output first, then the status
/// line for failures. Returns `None` when there is nothing to print.
pub fn render(result: &ExecResult) -> Option<String> {
    let mut parts = Vec::new();
    if !result.out.is_empty() {
        parts.push(result.out.clone());
    }
    if let Some(err) = &result.status {
        parts.push(err.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
