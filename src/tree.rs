use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use tracing::{debug, instrument};

use crate::arena::{NodeArena, NodeId};
use crate::collection::{NodeCollection, NodeCollectionMut, Owner};
use crate::config::TreeConfig;
use crate::errors::{TreeError, TreeResult};
use crate::node::NodeRef;
use crate::traversal::{Descendants, PostOrder, PreOrder};

/// Hierarchy of uniquely named nodes carrying values of type `T`.
///
/// The tree owns the root-level collection and every node below it. Nodes are
/// created through a collection (`create`/`create_with`) and addressed by
/// [`NodeId`] afterwards. No internal locking: sharing a tree across threads
/// is the caller's business.
#[derive(Debug)]
pub struct Tree<T> {
    pub(crate) nodes: NodeArena<T>,
    path_separator: char,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::with_separator(TreeConfig::DEFAULT_PATH_SEPARATOR)
    }

    pub fn with_separator(path_separator: char) -> Self {
        Self {
            nodes: NodeArena::new(),
            path_separator,
        }
    }

    pub fn with_config(config: &TreeConfig) -> Self {
        Self::with_separator(config.path_separator)
    }

    pub fn path_separator(&self) -> char {
        self.path_separator
    }

    /// Affects only full names and path lookups computed afterwards.
    #[instrument(level = "debug", skip(self))]
    pub fn set_path_separator(&mut self, path_separator: char) {
        self.path_separator = path_separator;
    }

    /// The root-level collection.
    pub fn nodes(&self) -> NodeCollection<'_, T> {
        NodeCollection::new(self, Owner::Root)
    }

    pub fn nodes_mut(&mut self) -> NodeCollectionMut<'_, T> {
        NodeCollectionMut::new(self, Owner::Root)
    }

    /// None if `owner` names a removed node.
    pub fn collection(&self, owner: Owner) -> Option<NodeCollection<'_, T>> {
        match owner {
            Owner::Root => Some(self.nodes()),
            Owner::Node(id) => self.children(id),
        }
    }

    pub fn collection_mut(&mut self, owner: Owner) -> TreeResult<NodeCollectionMut<'_, T>> {
        match owner {
            Owner::Root => Ok(self.nodes_mut()),
            Owner::Node(id) => self.children_mut(id),
        }
    }

    pub fn children(&self, id: NodeId) -> Option<NodeCollection<'_, T>> {
        self.node(id).map(|node| node.children())
    }

    pub fn children_mut(&mut self, id: NodeId) -> TreeResult<NodeCollectionMut<'_, T>> {
        if !self.nodes.contains(id) {
            return Err(TreeError::UnknownNode(id));
        }
        Ok(NodeCollectionMut::new(self, Owner::Node(id)))
    }

    /// Creates a root-level node holding `T::default()`.
    pub fn create(&mut self, name: &str) -> TreeResult<NodeId>
    where
        T: Default,
    {
        self.nodes_mut().create(name)
    }

    /// Creates a root-level node.
    pub fn create_with(&mut self, name: &str, value: T) -> TreeResult<NodeId> {
        self.nodes_mut().create_with(name, value)
    }

    /// Root-level node count, not the total number of nodes.
    pub fn count(&self) -> usize {
        self.nodes.roots().len()
    }

    /// Total number of nodes at all levels.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.roots().is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        NodeRef::new(self, id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(id)
    }

    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|record| &record.value)
    }

    pub fn value_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|record| &mut record.value)
    }

    /// Replaces the value of `id` and returns the previous one.
    pub fn set_value(&mut self, id: NodeId, value: T) -> TreeResult<T> {
        let slot = self.value_mut(id).ok_or(TreeError::UnknownNode(id))?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes `id` from whatever collection owns it, together with its subtree.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: NodeId) -> Option<T> {
        let value = self.nodes.remove_node(id);
        if value.is_some() {
            debug!(%id, "removed node and its subtree");
        }
        value
    }

    /// Path lookup from the root level, see [`NodeCollection::find_by_path`].
    pub fn find_by_path(&self, path: &str) -> TreeResult<Option<NodeRef<'_, T>>> {
        self.nodes().find_by_path(path)
    }

    pub fn get_by_path(&self, path: &str) -> TreeResult<NodeRef<'_, T>> {
        self.nodes().get_by_path(path)
    }

    /// Every node of the tree, breadth-first.
    pub fn descendants(&self) -> Descendants<'_, T> {
        Descendants::new(self)
    }

    /// Breadth-first walk yielding only nodes accepted by `filter`.
    ///
    /// `filter` is called once per node, in traversal order.
    pub fn descendants_where<'a, F>(&'a self, mut filter: F) -> impl Iterator<Item = NodeRef<'a, T>>
    where
        F: FnMut(&NodeRef<'a, T>) -> bool + 'a,
    {
        self.descendants().filter(move |node| filter(node))
    }

    pub fn iter_preorder(&self) -> PreOrder<'_, T> {
        PreOrder::new(self)
    }

    pub fn iter_postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self)
    }

    /// Number of levels below the root; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut queue: VecDeque<(NodeId, usize)> =
            self.nodes.roots().iter().map(|&id| (id, 1)).collect();

        while let Some((id, depth)) = queue.pop_front() {
            max_depth = max_depth.max(depth);
            if let Some(children) = self.nodes.children_of(Some(id)) {
                queue.extend(children.iter().map(|&child| (child, depth + 1)));
            }
        }

        max_depth
    }

    /// Nodes without children, breadth-first.
    #[instrument(level = "debug", skip(self))]
    pub fn leaves(&self) -> Vec<NodeRef<'_, T>> {
        self.descendants().filter(|node| node.is_leaf()).collect()
    }
}

/// Strict value access; panics on a removed or foreign id.
impl<T> Index<NodeId> for Tree<T> {
    type Output = T;

    fn index(&self, id: NodeId) -> &T {
        match self.value(id) {
            Some(value) => value,
            None => panic!("no node {} in tree", id),
        }
    }
}

impl<T> IndexMut<NodeId> for Tree<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        match self.value_mut(id) {
            Some(value) => value,
            None => panic!("no node {} in tree", id),
        }
    }
}
