//! Grammar node model
//!
//! A grammar is an arena of [`Node`]s addressed by [`NodeId`]. It is built
//! once through [`GrammarBuilder`] and only read afterwards: parse results are
//! kept in a separate [`Values`](crate::engine::Values) table, so a single
//! grammar can serve any number of parses, including concurrent ones.
//!
//! ```text
//! Keyword "oper"
//! ├── on   → Action
//! ├── off  → Action
//! └── fan  → Integer "temp" → Keyword "units" (callback)
//! ```
//!
//! Nodes are added leaves first, so every reference points at a node that
//! already exists.

mod builder;
mod node;
mod validate;

pub use builder::GrammarBuilder;
pub use node::{Callback, KeywordOption, Node, NodeKind};
pub use validate::GrammarIssue;

use crate::base::NodeId;

/// An immutable parameter grammar.
///
/// `C` is the caller-supplied context type handed to callbacks.
pub struct Grammar<C = ()> {
    nodes: Vec<Node<C>>,
}

impl<C> Grammar<C> {
    pub fn builder() -> GrammarBuilder<C> {
        GrammarBuilder::new()
    }

    pub(crate) fn from_nodes(nodes: Vec<Node<C>>) -> Self {
        Self { nodes }
    }

    /// Look up a node. `None` for ids that belong to another grammar.
    pub fn node(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id.index())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node<C>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId::new(index), node))
    }
}

impl<C> Clone for Grammar<C> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
        }
    }
}

impl<C> std::fmt::Debug for Grammar<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grammar").field("nodes", &self.nodes).finish()
    }
}
