//! memsh-kernel: the core of memsh.
//!
//! This crate provides:
//!
//! - **fs**: the in-memory file tree — arena node store, path resolution,
//!   create/delete/move/write mutators with incremental size accounting,
//!   and the two-tier access-control gate
//! - **Session**: the explicit per-session context (tree, cwd, principal,
//!   shared secret) threaded through every operation
//! - **Tools**: the `Tool` trait, registry, and one builtin per command
//! - **Dispatch**: line tokenization and command routing
//!
//! Everything is synchronous: one command runs to completion before the
//! next line is read, and every mutation finishes its ancestor size
//! propagation before returning.

pub mod dispatch;
pub mod fs;
pub mod session;
pub mod tools;

pub use dispatch::{tokenize, Dispatcher, MAX_TOKENS};
pub use fs::access::{permitted, Auth, DEFAULT_SECRET, MAX_SECRET_LEN};
pub use fs::node::{validate_name, NodeId, NodeKind, MAX_NAME_LEN};
pub use fs::ops::{WriteMode, MAX_CONTENT_LEN};
pub use fs::tree::Tree;
pub use session::{ConfirmSource, ScriptedConfirm, Session};
