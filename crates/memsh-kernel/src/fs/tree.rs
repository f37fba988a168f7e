//! Arena tree: node storage, lookup, path resolution, size propagation.
//!
//! All nodes reachable from the root live in one arena. Deleting a
//! subtree returns its slots to a free list; handles to freed slots are
//! stale and must not be used again.

use memsh_types::Principal;

use super::node::{Node, NodeId, NodeKind};

/// Ancestry walk bound. Exceeding it means the parent links are corrupted.
const MAX_PATH_DEPTH: usize = 512;

/// The in-memory file tree.
pub struct Tree {
    nodes: Vec<Option<Node>>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Tree {
    /// Create a tree holding only the root directory `/`.
    pub fn new() -> Self {
        let root = Node::new("/", NodeKind::Directory, Principal::Casual);
        Self {
            nodes: vec![Some(root)],
            free: Vec::new(),
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of live nodes (root included).
    pub fn len(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }

    /// Borrow a node by handle.
    ///
    /// # Panics
    ///
    /// Panics on a stale or out-of-bounds handle.
    pub fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.0].as_ref().expect("stale node handle")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.0].as_mut().expect("stale node handle")
    }

    /// True if `id` still points at a live node.
    pub fn is_live(&self, id: NodeId) -> bool {
        self.nodes.get(id.0).is_some_and(|slot| slot.is_some())
    }

    pub(crate) fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = Some(node);
                NodeId(index)
            }
            None => {
                self.nodes.push(Some(node));
                NodeId(self.nodes.len() - 1)
            }
        }
    }

    /// Find a direct child of `dir` by exact name match.
    ///
    /// Linear scan; duplicate names are prevented at creation, so the
    /// scan order tie-break is never observable.
    pub fn find_child(&self, dir: NodeId, name: &str) -> Option<NodeId> {
        self.node(dir)
            .children
            .iter()
            .copied()
            .find(|&child| self.node(child).name == name)
    }

    /// Resolve an absolute path to a node.
    ///
    /// Only absolute paths are resolved here; bare relative names are
    /// looked up directly against the current directory by the caller.
    /// Consecutive slashes collapse. Any failed segment lookup is a miss.
    pub fn resolve(&self, path: &str) -> Option<NodeId> {
        if path.is_empty() || !path.starts_with('/') {
            return None;
        }
        let mut cursor = self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            cursor = self.find_child(cursor, segment)?;
        }
        Some(cursor)
    }

    /// Render the absolute path of a node; the root renders as `/`.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(id);
        while let Some(cur) = cursor {
            if segments.len() >= MAX_PATH_DEPTH {
                tracing::error!("ancestry deeper than {MAX_PATH_DEPTH}; parent links corrupted");
                break;
            }
            let node = self.node(cur);
            if node.parent.is_some() {
                segments.push(node.name.clone());
            }
            cursor = node.parent;
        }
        if segments.is_empty() {
            return "/".to_string();
        }
        segments.reverse();
        let mut path = String::new();
        for segment in &segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }

    /// True if `ancestor` lies on the strict parent chain of `id`.
    pub fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut cursor = self.node(id).parent;
        while let Some(cur) = cursor {
            if cur == ancestor {
                return true;
            }
            cursor = self.node(cur).parent;
        }
        false
    }

    /// Attach a detached node as a child of `parent` and propagate its
    /// aggregate size up the new ancestor chain.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.node(parent).is_dir());
        debug_assert!(self.node(child).parent.is_none());
        let size = self.node(child).subtree_size;
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.apply_size_delta(parent, size as i64);
    }

    /// Unlink a node from its parent and subtract its aggregate size from
    /// every former ancestor. The node keeps its own subtree intact.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).parent else {
            return;
        };
        let size = self.node(id).subtree_size;
        self.node_mut(parent).children.retain(|&child| child != id);
        self.node_mut(id).parent = None;
        self.apply_size_delta(parent, -(size as i64));
    }

    /// Add `delta` to the aggregate size of `start` and every ancestor.
    pub(crate) fn apply_size_delta(&mut self, start: NodeId, delta: i64) {
        if delta == 0 {
            return;
        }
        let mut cursor = Some(start);
        while let Some(cur) = cursor {
            let node = self.node_mut(cur);
            node.subtree_size = node.subtree_size.saturating_add_signed(delta);
            cursor = node.parent;
        }
    }

    /// Recursively release a detached node and all its descendants.
    pub(crate) fn free_subtree(&mut self, id: NodeId) {
        debug_assert!(self.node(id).parent.is_none());
        let mut stack = vec![id];
        while let Some(cur) = stack.pop() {
            let node = self.nodes[cur.0].take().expect("stale node handle");
            stack.extend(node.children);
            self.free.push(cur.0);
        }
    }

    /// Recompute every aggregate size from scratch.
    ///
    /// Corrective/validation path only; steady-state sizes are maintained
    /// incrementally. Returns true if any cached value diverged.
    pub fn recompute_sizes(&mut self) -> bool {
        let mut diverged = false;
        self.recompute_from(self.root, &mut diverged);
        if diverged {
            tracing::warn!("cached subtree sizes diverged from content; corrected");
        }
        diverged
    }

    fn recompute_from(&mut self, id: NodeId, diverged: &mut bool) -> u64 {
        let children = self.node(id).children.clone();
        let mut total = self.node(id).own_size();
        for child in children {
            total += self.recompute_from(child, diverged);
        }
        if self.node(id).subtree_size != total {
            *diverged = true;
            self.node_mut(id).subtree_size = total;
        }
        total
    }
}
