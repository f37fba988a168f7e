//! Pure data types for memsh — outcome taxonomy, principals, command results.
//!
//! This crate is a leaf dependency with no I/O and no tree logic. It exists
//! so that embedders can consume memsh's result and error types without
//! pulling in the kernel.

pub mod error;
pub mod principal;
pub mod result;

// Flat re-exports for convenience
pub use error::*;
pub use principal::*;
pub use result::*;
