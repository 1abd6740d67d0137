use generational_arena::{Arena, Index};
use std::fmt;
use tracing::instrument;

/// Handle of a node stored in a [`crate::Tree`].
///
/// Handles are generational: once a node is removed its id never resolves
/// again, even if the slot is reused for a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "{}@{}", slot, generation)
    }
}

/// Stored form of a tree node.
#[derive(Debug)]
pub(crate) struct NodeRecord<T> {
    /// Unique among siblings, never empty
    pub(crate) name: String,
    pub(crate) value: T,
    /// Id of the owning node, None for root-level nodes
    pub(crate) parent: Option<NodeId>,
    /// Child ids in insertion order
    pub(crate) children: Vec<NodeId>,
}

/// Arena holding every node of one tree plus the ordered root level.
///
/// Parent links are plain ids, so there is no ownership cycle between a node
/// and the collection it lives in.
#[derive(Debug)]
pub(crate) struct NodeArena<T> {
    arena: Arena<NodeRecord<T>>,
    roots: Vec<NodeId>,
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodeArena<T> {
    pub(crate) fn new() -> Self {
        Self {
            arena: Arena::new(),
            roots: Vec::new(),
        }
    }

    /// Inserts a node and appends it to its parent's children (or the root level).
    ///
    /// The caller guarantees that `parent` is live and the name is free.
    #[instrument(level = "trace", skip(self, value))]
    pub(crate) fn insert_node(&mut self, name: String, value: T, parent: Option<NodeId>) -> NodeId {
        let record = NodeRecord {
            name,
            value,
            parent,
            children: Vec::new(),
        };
        let node_id = NodeId(self.arena.insert(record));

        match parent {
            Some(parent_id) => {
                if let Some(parent) = self.arena.get_mut(parent_id.0) {
                    parent.children.push(node_id);
                }
            }
            None => self.roots.push(node_id),
        }

        node_id
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&NodeRecord<T>> {
        self.arena.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut NodeRecord<T>> {
        self.arena.get_mut(id.0)
    }

    pub(crate) fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    pub(crate) fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Child ids of `parent`, or the root level for None. None if `parent` is stale.
    pub(crate) fn children_of(&self, parent: Option<NodeId>) -> Option<&[NodeId]> {
        match parent {
            Some(parent_id) => self.get(parent_id).map(|record| record.children.as_slice()),
            None => Some(&self.roots),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.arena.len()
    }

    /// Unlinks `id` from its parent and frees it together with its whole subtree.
    ///
    /// Returns the value of `id` itself; subtree values are dropped.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let parent = self.get(id)?.parent;
        let siblings = match parent {
            Some(parent_id) => &mut self.get_mut(parent_id)?.children,
            None => &mut self.roots,
        };
        siblings.retain(|&sibling| sibling != id);

        let mut removed_value = None;
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(record) = self.arena.remove(current.0) {
                stack.extend(record.children.iter().copied());
                if current == id {
                    removed_value = Some(record.value);
                }
            }
        }
        removed_value
    }
}
