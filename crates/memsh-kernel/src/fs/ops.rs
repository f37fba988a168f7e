//! Principal-gated mutators and the file content store.
//!
//! Callers resolve targets to handles first (see `Session`); the
//! operations here own validation, permission checks, and keeping the
//! aggregate-size invariant true after every mutation.

use memsh_types::{Principal, ShellError, ShellResult};

use super::access::permitted;
use super::node::{validate_name, Node, NodeId, NodeKind};
use super::tree::Tree;

/// Maximum byte length of a file's content buffer.
pub const MAX_CONTENT_LEN: usize = 1023;

/// How `write` treats the existing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the buffer entirely.
    Overwrite,
    /// Concatenate onto the existing buffer.
    Append,
}

impl Tree {
    /// Create a file under `parent`.
    pub fn create_file(
        &mut self,
        parent: NodeId,
        name: &str,
        principal: Principal,
    ) -> ShellResult<NodeId> {
        self.create_entry(parent, name, NodeKind::File, principal)
    }

    /// Create a directory under `parent`.
    ///
    /// A directory created under a Superuser-owned parent is owned by
    /// Superuser regardless of the acting principal; files are not
    /// escalated.
    pub fn create_dir(
        &mut self,
        parent: NodeId,
        name: &str,
        principal: Principal,
    ) -> ShellResult<NodeId> {
        self.create_entry(parent, name, NodeKind::Directory, principal)
    }

    fn create_entry(
        &mut self,
        parent: NodeId,
        name: &str,
        kind: NodeKind,
        principal: Principal,
    ) -> ShellResult<NodeId> {
        validate_name(name)?;
        if self.find_child(parent, name).is_some() {
            return Err(ShellError::AlreadyExists);
        }
        if !permitted(self.node(parent).creator(), principal) {
            return Err(ShellError::PermissionDenied);
        }
        let mut creator = principal;
        if kind == NodeKind::Directory && self.node(parent).creator().is_superuser() {
            creator = Principal::Superuser;
        }
        let id = self.alloc(Node::new(name, kind, creator));
        self.attach(parent, id);
        tracing::debug!(name, ?kind, "created entry");
        Ok(id)
    }

    /// Delete `target` and its whole subtree.
    ///
    /// The root is never deletable; protecting the current working
    /// directory is the caller's job since the tree does not know it.
    /// Permission is checked against the target itself before unlinking.
    pub fn remove(&mut self, target: NodeId, principal: Principal) -> ShellResult<()> {
        if target == self.root() {
            return Err(ShellError::InvalidArguments);
        }
        if !permitted(self.node(target).creator(), principal) {
            return Err(ShellError::PermissionDenied);
        }
        let size = self.node(target).subtree_size();
        self.detach(target);
        self.free_subtree(target);
        tracing::debug!(freed = size, "deleted subtree");
        Ok(())
    }

    /// Relink `source` under the directory `dest`.
    ///
    /// A name collision in the destination aborts before unlinking, so
    /// the source stays attached to its original parent. The moved
    /// subtree's aggregate size leaves the old ancestor chain and joins
    /// the new one.
    pub fn move_entry(&mut self, source: NodeId, dest: NodeId) -> ShellResult<()> {
        if !self.node(dest).is_dir() {
            return Err(ShellError::NotADirectory);
        }
        if source == self.root() || source == dest || self.is_ancestor(source, dest) {
            return Err(ShellError::InvalidArguments);
        }
        let name = self.node(source).name().to_string();
        if self.find_child(dest, &name).is_some() {
            return Err(ShellError::AlreadyExists);
        }
        self.detach(source);
        self.attach(dest, source);
        tracing::debug!(name, "moved entry");
        Ok(())
    }

    /// Write to a file's content buffer and propagate the size delta.
    pub fn write(
        &mut self,
        file: NodeId,
        mode: WriteMode,
        content: &[u8],
        principal: Principal,
    ) -> ShellResult<()> {
        if !permitted(self.node(file).creator(), principal) {
            return Err(ShellError::PermissionDenied);
        }
        if !self.node(file).is_file() {
            return Err(ShellError::NotAFile);
        }
        let old = self.node(file).own_size();
        let new_len = match mode {
            WriteMode::Overwrite => content.len(),
            WriteMode::Append => self.node(file).content().len() + content.len(),
        };
        if new_len > MAX_CONTENT_LEN {
            return Err(ShellError::TooLong);
        }
        {
            let node = self.node_mut(file);
            match mode {
                WriteMode::Overwrite => {
                    node.content.clear();
                    node.content.extend_from_slice(content);
                }
                WriteMode::Append => node.content.extend_from_slice(content),
            }
        }
        let delta = new_len as i64 - old as i64;
        self.apply_size_delta(file, delta);
        Ok(())
    }

    /// Read a file's raw buffer; empty if never written.
    pub fn read(&self, file: NodeId, principal: Principal) -> ShellResult<&[u8]> {
        if !permitted(self.node(file).creator(), principal) {
            return Err(ShellError::PermissionDenied);
        }
        if !self.node(file).is_file() {
            return Err(ShellError::NotAFile);
        }
        Ok(self.node(file).content())
    }
}
