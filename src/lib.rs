//! In-memory tree of uniquely named nodes.
//!
//! A [`Tree`] owns an ordered root-level collection; every node owns an
//! ordered collection of children. Names are unique among siblings, so any
//! node can be addressed by the separator-joined names of its ancestors,
//! e.g. `tree.find_by_path("a/x")`.
//!
//! Nodes are stored in a generational arena and handed out as [`NodeId`]s;
//! borrowed [`NodeRef`] views give access to names, values and navigation.

pub mod arena;
pub mod collection;
pub mod config;
pub mod errors;
pub mod node;
pub mod traversal;
pub mod tree;
pub mod util;

pub use arena::NodeId;
pub use collection::{NodeCollection, NodeCollectionMut, Owner};
pub use crate::config::{RawTreeConfig, TreeConfig};
pub use errors::{TreeError, TreeResult};
pub use node::{Ancestors, NodeRef};
pub use traversal::{Descendants, PostOrder, PreOrder};
pub use tree::Tree;
