//! Name-keyed sibling collections.
//!
//! A collection is not stored on its own: it is the ordered child list of a
//! node, or the root level of the tree. [`NodeCollection`] and
//! [`NodeCollectionMut`] are views scoped to one [`Owner`].

use std::fmt;
use std::slice;

use tracing::{debug, instrument};

use crate::arena::NodeId;
use crate::errors::{TreeError, TreeResult};
use crate::node::NodeRef;
use crate::tree::Tree;

/// What a collection belongs to: the tree root or a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Owner {
    Root,
    Node(NodeId),
}

impl Owner {
    /// Id of the owning node, None at the root level.
    pub fn node_id(self) -> Option<NodeId> {
        match self {
            Owner::Root => None,
            Owner::Node(id) => Some(id),
        }
    }
}

impl From<Option<NodeId>> for Owner {
    fn from(parent: Option<NodeId>) -> Self {
        parent.map_or(Owner::Root, Owner::Node)
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Root => write!(f, "root"),
            Owner::Node(id) => write!(f, "node {}", id),
        }
    }
}

/// Read-only view of the children of one owner, in insertion order.
pub struct NodeCollection<'a, T> {
    tree: &'a Tree<T>,
    owner: Owner,
}

impl<T> Clone for NodeCollection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeCollection<'_, T> {}

impl<T> fmt::Debug for NodeCollection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| node.name()))
            .finish()
    }
}

impl<'a, T> NodeCollection<'a, T> {
    /// The owner must be live in `tree`.
    pub(crate) fn new(tree: &'a Tree<T>, owner: Owner) -> Self {
        Self { tree, owner }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    fn ids(&self) -> &'a [NodeId] {
        self.tree
            .nodes
            .children_of(self.owner.node_id())
            .unwrap_or(&[])
    }

    /// Number of immediate children.
    pub fn count(&self) -> usize {
        self.ids().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            tree: self.tree,
            ids: self.ids().iter(),
        }
    }

    /// Insertion index of the child called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        let nodes = &self.tree.nodes;
        self.ids()
            .iter()
            .position(|&id| nodes.get(id).is_some_and(|record| record.name == name))
    }

    /// Exact, case-sensitive match against immediate children only.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<NodeRef<'a, T>> {
        let position = self.position(name)?;
        self.get_at(position)
    }

    /// Strict lookup: absence is an error.
    pub fn get(&self, name: &str) -> TreeResult<NodeRef<'a, T>> {
        self.find(name)
            .ok_or_else(|| TreeError::NotFound(name.to_string()))
    }

    pub fn get_at(&self, position: usize) -> Option<NodeRef<'a, T>> {
        let id = *self.ids().get(position)?;
        NodeRef::new(self.tree, id)
    }

    /// Resolves `path` segment by segment, starting with this collection's children.
    ///
    /// An empty path, or any segment that does not resolve, yields `Ok(None)`.
    /// A path with an empty segment (leading, trailing or doubled separator)
    /// is rejected with [`TreeError::InvalidPath`].
    #[instrument(level = "trace", skip(self))]
    pub fn find_by_path(&self, path: &str) -> TreeResult<Option<NodeRef<'a, T>>> {
        if path.is_empty() {
            return Ok(None);
        }
        let separator = self.tree.path_separator();
        if path.split(separator).any(str::is_empty) {
            return Err(TreeError::InvalidPath(path.to_string()));
        }

        let mut level = *self;
        let mut found = None;
        for segment in path.split(separator) {
            match level.find(segment) {
                Some(node) => {
                    level = node.children();
                    found = Some(node);
                }
                None => return Ok(None),
            }
        }
        Ok(found)
    }

    /// Strict variant of [`Self::find_by_path`].
    pub fn get_by_path(&self, path: &str) -> TreeResult<NodeRef<'a, T>> {
        self.find_by_path(path)?
            .ok_or_else(|| TreeError::NotFound(path.to_string()))
    }
}

impl<'a, T> IntoIterator for NodeCollection<'a, T> {
    type Item = NodeRef<'a, T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the nodes of a collection in insertion order.
pub struct Iter<'a, T> {
    tree: &'a Tree<T>,
    ids: slice::Iter<'a, NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.ids.find_map(|&id| NodeRef::new(tree, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.ids.len()))
    }
}

/// Mutating view of the children of one owner.
///
/// Every mutation validates first; a failed call leaves the collection unchanged.
pub struct NodeCollectionMut<'a, T> {
    tree: &'a mut Tree<T>,
    owner: Owner,
}

impl<'a, T> NodeCollectionMut<'a, T> {
    /// The owner must be live in `tree`.
    pub(crate) fn new(tree: &'a mut Tree<T>, owner: Owner) -> Self {
        Self { tree, owner }
    }

    pub fn owner(&self) -> Owner {
        self.owner
    }

    pub fn view(&self) -> NodeCollection<'_, T> {
        NodeCollection::new(&*self.tree, self.owner)
    }

    pub fn count(&self) -> usize {
        self.view().count()
    }

    pub fn is_empty(&self) -> bool {
        self.view().is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.view().contains(name)
    }

    /// Creates a child holding `T::default()`.
    pub fn create(&mut self, name: &str) -> TreeResult<NodeId>
    where
        T: Default,
    {
        self.create_with(name, T::default())
    }

    #[instrument(level = "debug", skip(self, value), fields(owner = %self.owner))]
    pub fn create_with(&mut self, name: &str, value: T) -> TreeResult<NodeId> {
        if name.is_empty() {
            return Err(TreeError::InvalidName);
        }
        if self.contains(name) {
            return Err(TreeError::DuplicateName(name.to_string()));
        }
        let id = self
            .tree
            .nodes
            .insert_node(name.to_string(), value, self.owner.node_id());
        debug!(%id, "created node");
        Ok(id)
    }

    /// Removes the child called `name` with its whole subtree and returns its value.
    #[instrument(level = "debug", skip(self), fields(owner = %self.owner))]
    pub fn remove(&mut self, name: &str) -> Option<T> {
        let id = self.view().find(name)?.id();
        self.remove_node(id)
    }

    /// Removes `id` if it is an immediate child of this collection.
    #[instrument(level = "debug", skip(self), fields(owner = %self.owner))]
    pub fn remove_node(&mut self, id: NodeId) -> Option<T> {
        let is_child = self
            .tree
            .nodes
            .get(id)
            .is_some_and(|record| Owner::from(record.parent) == self.owner);
        if !is_child {
            return None;
        }
        let value = self.tree.nodes.remove_node(id);
        debug!(%id, "removed node and its subtree");
        value
    }

    /// Removes every child subtree.
    #[instrument(level = "debug", skip(self), fields(owner = %self.owner))]
    pub fn clear(&mut self) {
        let ids: Vec<NodeId> = self.view().ids().to_vec();
        for id in ids {
            self.tree.nodes.remove_node(id);
        }
    }
}
