//! The in-memory file tree.
//!
//! Nodes live in an arena addressed by stable [`NodeId`](node::NodeId)
//! handles; directories hold child handles and every non-root node holds
//! a parent handle. Split by concern:
//!
//! - [`node`] — the node entity and name validation
//! - [`tree`] — arena storage, child lookup, path resolution, size
//!   propagation, subtree free
//! - [`ops`] — principal-gated mutators and the file content store
//! - [`access`] — the permission gate and the shared superuser secret

pub mod access;
pub mod node;
pub mod ops;
pub mod tree;
