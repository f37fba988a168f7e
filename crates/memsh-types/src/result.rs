//! ExecResult — the structured result of every command execution.
//!
//! The dispatcher produces one of these per input line; the boundary
//! (REPL or one-shot runner) renders it: output text first, then the
//! status line if the command failed.

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// The result of executing one command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Failure kind, if any. `None` means the command succeeded.
    pub status: Option<ShellError>,
    /// Output text produced by the command. May be non-empty even on
    /// failure (usage hints and deletion notices precede the status line).
    pub out: String,
    /// True when the command asked the shell loop to terminate (`exit`).
    #[serde(default)]
    pub halt: bool,
}

impl ExecResult {
    /// A successful result with output.
    pub fn success(out: impl Into<String>) -> Self {
        Self {
            status: None,
            out: out.into(),
            halt: false,
        }
    }

    /// A failed result with no extra output.
    pub fn failure(status: ShellError) -> Self {
        Self {
            status: Some(status),
            out: String::new(),
            halt: false,
        }
    }

    /// A failed result with a notice line printed before the status line.
    pub fn failure_with_notice(status: ShellError, notice: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            out: notice.into(),
            halt: false,
        }
    }

    /// A successful result that terminates the shell loop.
    pub fn halt() -> Self {
        Self {
            status: None,
            out: String::new(),
            halt: true,
        }
    }

    /// True if the command succeeded.
    pub fn ok(&self) -> bool {
        self.status.is_none()
    }
}

impl Default for ExecResult {
    fn default() -> Self {
        Self::success("")
    }
}

impl From<ShellError> for ExecResult {
    fn from(status: ShellError) -> Self {
        Self::failure(status)
    }
}
