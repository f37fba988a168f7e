//! The per-session execution context.
//!
//! The tree root, current directory, principal, and secret all live in an
//! explicit [`Session`] that the dispatcher threads into every tool. The
//! session also owns the confirmation seam so that the interactive yes/no
//! prompt stays at the boundary while delete itself takes a resolved
//! answer.

use std::collections::VecDeque;

use memsh_types::{Principal, ShellError, ShellResult};

use crate::fs::access::Auth;
use crate::fs::node::NodeId;
use crate::fs::ops::WriteMode;
use crate::fs::tree::Tree;

/// Source of yes/no confirmation replies.
///
/// The REPL installs a stdin-backed implementation; tests use
/// [`ScriptedConfirm`]. `None` means no reply could be obtained.
pub trait ConfirmSource {
    /// Ask whether `target` should be deleted; returns the raw reply.
    fn ask(&mut self, target: &str) -> Option<String>;
}

/// Default source: never produces a reply.
struct NoConfirm;

impl ConfirmSource for NoConfirm {
    fn ask(&mut self, _target: &str) -> Option<String> {
        None
    }
}

/// Canned confirmation replies, consumed in order.
///
/// For tests and non-interactive embedders.
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    replies: VecDeque<String>,
}

impl ScriptedConfirm {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl ConfirmSource for ScriptedConfirm {
    fn ask(&mut self, _target: &str) -> Option<String> {
        self.replies.pop_front()
    }
}

/// One interactive session over one tree.
pub struct Session {
    tree: Tree,
    cwd: NodeId,
    principal: Principal,
    auth: Auth,
    confirm: Box<dyn ConfirmSource>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session: empty tree, cwd at root, Casual principal,
    /// default secret.
    pub fn new() -> Self {
        let tree = Tree::new();
        let cwd = tree.root();
        Self {
            tree,
            cwd,
            principal: Principal::Casual,
            auth: Auth::new(),
            confirm: Box::new(NoConfirm),
        }
    }

    /// A fresh session with a custom superuser secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        let mut session = Self::new();
        session.auth = Auth::with_secret(secret);
        session
    }

    /// Install the boundary's confirmation source.
    pub fn set_confirm_source(&mut self, source: Box<dyn ConfirmSource>) {
        self.confirm = source;
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    pub fn principal(&self) -> Principal {
        self.principal
    }

    /// Absolute path of the current directory, for the prompt.
    pub fn cwd_path(&self) -> String {
        self.tree.absolute_path(self.cwd)
    }

    /// Ask the confirmation source about deleting `target`.
    pub fn confirm_delete(&mut self, target: &str) -> Option<String> {
        self.confirm.ask(target)
    }

    /// Look up a command target: strings containing `/` resolve as
    /// absolute paths, bare names are direct cwd-child lookups.
    pub fn lookup(&self, target: &str) -> Option<NodeId> {
        if target.contains('/') {
            self.tree.resolve(target)
        } else {
            self.tree.find_child(self.cwd, target)
        }
    }

    /// Resolve a delete target.
    ///
    /// A path form locates the parent first (empty parent means root) and
    /// matches the final segment as a literal child name; a bare name is
    /// a cwd-child lookup.
    pub fn resolve_delete_target(&self, target: &str) -> ShellResult<NodeId> {
        if target == "/" {
            return Ok(self.tree.root());
        }
        match target.rfind('/') {
            Some(split) => {
                let (parent_path, name) = target.split_at(split);
                let name = &name[1..];
                let parent = if parent_path.is_empty() {
                    Some(self.tree.root())
                } else {
                    self.tree.resolve(parent_path)
                };
                let parent = parent.ok_or(ShellError::NotFound)?;
                self.tree.find_child(parent, name).ok_or(ShellError::NotFound)
            }
            None => self
                .tree
                .find_child(self.cwd, target)
                .ok_or(ShellError::NotFound),
        }
    }

    /// True if `id` is the current directory or one of its ancestors.
    ///
    /// Deleting either would leave the session holding a dead cwd handle,
    /// so both are rejected at delete time.
    pub fn shields_cwd(&self, id: NodeId) -> bool {
        id == self.cwd || self.tree.is_ancestor(id, self.cwd)
    }

    /// Change the current directory.
    ///
    /// `..` steps to the parent (NotFound at the root); strings with `/`
    /// resolve absolutely; bare names are cwd-child lookups. Entering a
    /// directory is permission-gated.
    pub fn change_dir(&mut self, target: &str) -> ShellResult<()> {
        if target == ".." {
            return match self.tree.node(self.cwd).parent() {
                Some(parent) => {
                    self.cwd = parent;
                    Ok(())
                }
                None => Err(ShellError::NotFound),
            };
        }
        let id = self.lookup(target).ok_or(ShellError::NotFound)?;
        if !self.tree.node(id).is_dir() {
            return Err(ShellError::NotADirectory);
        }
        if !crate::fs::access::permitted(self.tree.node(id).creator(), self.principal) {
            return Err(ShellError::PermissionDenied);
        }
        self.cwd = id;
        Ok(())
    }

    /// Create a directory in the current directory.
    pub fn make_dir(&mut self, name: &str) -> ShellResult<()> {
        self.tree.create_dir(self.cwd, name, self.principal)?;
        Ok(())
    }

    /// Create an empty file in the current directory.
    pub fn make_file(&mut self, name: &str) -> ShellResult<()> {
        self.tree.create_file(self.cwd, name, self.principal)?;
        Ok(())
    }

    /// Delete an already-resolved node (permission and root guards apply).
    pub fn delete_node(&mut self, id: NodeId) -> ShellResult<()> {
        self.tree.remove(id, self.principal)
    }

    /// Move `source` under the directory `dest`.
    pub fn move_target(&mut self, source: &str, dest: &str) -> ShellResult<()> {
        let source_id = self.lookup(source).ok_or(ShellError::NotFound)?;
        let dest_id = self.lookup(dest).ok_or(ShellError::NotFound)?;
        self.tree.move_entry(source_id, dest_id)
    }

    /// Write to an existing file.
    pub fn write_file(&mut self, target: &str, mode: WriteMode, content: &[u8]) -> ShellResult<()> {
        let id = self.lookup(target).ok_or(ShellError::NotFound)?;
        self.tree.write(id, mode, content, self.principal)
    }

    /// Read an existing file's content.
    pub fn read_file(&self, target: &str) -> ShellResult<Vec<u8>> {
        let id = self.lookup(target).ok_or(ShellError::NotFound)?;
        Ok(self.tree.read(id, self.principal)?.to_vec())
    }

    /// Switch principal.
    ///
    /// A Superuser drops back to Casual unconditionally; a Casual actor
    /// must present the shared secret.
    pub fn switch(&mut self, password: Option<&str>) -> ShellResult<()> {
        if self.principal.is_superuser() {
            self.principal = Principal::Casual;
            return Ok(());
        }
        let password = password.ok_or(ShellError::InvalidArguments)?;
        if !self.auth.verify(password) {
            return Err(ShellError::WrongPassword);
        }
        self.principal = Principal::Superuser;
        Ok(())
    }

    /// Change the shared secret (Superuser only).
    pub fn change_secret(&mut self, new_secret: &str) -> ShellResult<()> {
        self.auth.change(self.principal, new_secret)
    }
}
