//! Whole-tree iterators.
//!
//! Each iterator snapshots nothing but its pending queue or stack, so every
//! call on the tree starts a fresh walk over its current state.

use std::collections::VecDeque;

use tracing::instrument;

use crate::arena::NodeId;
use crate::node::NodeRef;
use crate::tree::Tree;

/// Breadth-first walk: all nodes of level k before any node of level k + 1,
/// siblings in insertion order.
pub struct Descendants<'a, T> {
    tree: &'a Tree<T>,
    queue: VecDeque<NodeId>,
}

impl<'a, T> Descendants<'a, T> {
    #[instrument(level = "trace", skip(tree))]
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            queue: tree.nodes.roots().iter().copied().collect(),
        }
    }
}

impl<'a, T> Iterator for Descendants<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_id) = self.queue.pop_front() {
            if let Some(node) = self.tree.node(current_id) {
                self.queue.extend(node.children().iter().map(|child| child.id()));
                return Some(node);
            }
        }
        None
    }
}

/// Depth-first pre-order walk over every root-level subtree.
pub struct PreOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> PreOrder<'a, T> {
    #[instrument(level = "trace", skip(tree))]
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            stack: tree.nodes.roots().iter().rev().copied().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_id) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_id) {
                // Push children in reverse order for left-to-right traversal
                if let Some(children) = self.tree.nodes.children_of(Some(current_id)) {
                    self.stack.extend(children.iter().rev().copied());
                }
                return Some(node);
            }
        }
        None
    }
}

/// Post-order walk: children before their parent.
pub struct PostOrder<'a, T> {
    tree: &'a Tree<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    #[instrument(level = "trace", skip(tree))]
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Self {
            tree,
            stack: tree
                .nodes
                .roots()
                .iter()
                .rev()
                .map(|&id| (id, false))
                .collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current_id, visited)) = self.stack.pop() {
            if let Some(node) = self.tree.node(current_id) {
                if visited {
                    return Some(node);
                }
                self.stack.push((current_id, true));
                if let Some(children) = self.tree.nodes.children_of(Some(current_id)) {
                    self.stack.extend(children.iter().rev().map(|&child| (child, false)));
                }
            }
        }
        None
    }
}
