use std::fmt;

use crate::arena::{NodeId, NodeRecord};
use crate::collection::{NodeCollection, Owner};
use crate::tree::Tree;

/// Borrowed view of one live node.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
    record: &'a NodeRecord<T>,
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("name", &self.record.name)
            .field("value", &self.record.value)
            .finish()
    }
}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.tree, other.tree)
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<'a, T> NodeRef<'a, T> {
    /// None if `id` is stale.
    pub(crate) fn new(tree: &'a Tree<T>, id: NodeId) -> Option<Self> {
        let record = tree.nodes.get(id)?;
        Some(Self { tree, id, record })
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &'a str {
        &self.record.name
    }

    pub fn value(&self) -> &'a T {
        &self.record.value
    }

    /// The collection this node lives in.
    pub fn owner(&self) -> Owner {
        Owner::from(self.record.parent)
    }

    /// Owning node, None for root-level nodes.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        NodeRef::new(self.tree, self.record.parent?)
    }

    /// Always owned by this node.
    pub fn children(&self) -> NodeCollection<'a, T> {
        NodeCollection::new(self.tree, Owner::Node(self.id))
    }

    pub fn is_leaf(&self) -> bool {
        self.record.children.is_empty()
    }

    /// Ancestors from the parent up to the root-level node.
    pub fn ancestors(&self) -> Ancestors<'a, T> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Distance from the tree root; root-level nodes are level 0.
    pub fn level(&self) -> usize {
        self.ancestors().count()
    }

    /// Ancestor names from the root down to this node, joined by the tree's
    /// current path separator.
    pub fn full_name(&self) -> String {
        let mut names: Vec<&str> = self.ancestors().map(|ancestor| ancestor.name()).collect();
        names.reverse();
        names.push(self.name());

        let mut buf = [0u8; 4];
        let separator = self.tree.path_separator().encode_utf8(&mut buf);
        names.join(&*separator)
    }
}

pub struct Ancestors<'a, T> {
    next: Option<NodeRef<'a, T>>,
}

impl<'a, T> Iterator for Ancestors<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}
