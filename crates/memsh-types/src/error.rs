//! The closed outcome taxonomy.
//!
//! Every failing operation maps to exactly one of these kinds, and every
//! kind renders as exactly one human-readable line. Failures never abort
//! the shell loop; they are terminal for the one command that produced
//! them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A failed command outcome.
///
/// The `Display` text is the user-facing line printed by the shell.
/// Success is `Ok(..)` on the `Result`, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ShellError {
    #[error("Sorry, your command is invalid!")]
    CommandNotFound,
    #[error("Sorry, your arguments are invalid!")]
    InvalidArguments,
    #[error("Not a directory!")]
    NotADirectory,
    #[error("File/Directory could not be found!")]
    NotFound,
    #[error("Permission denied!")]
    PermissionDenied,
    #[error("File/Directory already exists!")]
    AlreadyExists,
    #[error("Your statement includes illegal characters!")]
    IllegalCharacter,
    #[error("Input is too long!")]
    TooLong,
    #[error("Not a file!")]
    NotAFile,
    #[error("Wrong password!")]
    WrongPassword,
}

/// Shorthand for operation results across the kernel.
pub type ShellResult<T> = Result<T, ShellError>;
