//! Node entity and name validation.

use memsh_types::{Principal, ShellError, ShellResult};

/// Maximum visible length of an entry name.
pub const MAX_NAME_LEN: usize = 31;

/// Handle into the tree arena.
///
/// A lightweight index that can be copied freely. Handles are only
/// invalidated by deleting the node they point to; using a stale handle
/// against the arena panics, which indicates a bug in the calling code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Whether a node is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Directory,
    File,
}

/// A file or directory in the tree.
#[derive(Debug)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) kind: NodeKind,
    /// `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Directories only; files never have children.
    pub(crate) children: Vec<NodeId>,
    /// Files only; empty means never written.
    pub(crate) content: Vec<u8>,
    /// Cached aggregate: own content length plus children's subtree sizes.
    pub(crate) subtree_size: u64,
    /// Fixed at creation; never changed by writes.
    pub(crate) creator: Principal,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, kind: NodeKind, creator: Principal) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            children: Vec::new(),
            content: Vec::new(),
            subtree_size: 0,
            creator,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory)
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, NodeKind::File)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Byte length of this node's own content (0 for directories).
    pub fn own_size(&self) -> u64 {
        self.content.len() as u64
    }

    /// Cached aggregate size of this node and all descendants.
    pub fn subtree_size(&self) -> u64 {
        self.subtree_size
    }

    pub fn creator(&self) -> Principal {
        self.creator
    }
}

/// Validate an entry name against the shell's rules.
///
/// Names are 1..=31 characters from `[A-Za-z0-9_.-]`; `.` and `..` are
/// reserved and the empty name is illegal.
pub fn validate_name(name: &str) -> ShellResult<()> {
    if name.len() > MAX_NAME_LEN {
        return Err(ShellError::TooLong);
    }
    if name.is_empty() || name == "." || name == ".." {
        return Err(ShellError::IllegalCharacter);
    }
    let legal = name
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b'.');
    if !legal {
        return Err(ShellError::IllegalCharacter);
    }
    Ok(())
}
