use crate::base::NodeId;

use super::{Grammar, Node};

/// Incrementally assembles a [`Grammar`].
///
/// ```
/// use paramtree::grammar::{GrammarBuilder, KeywordOption, Node};
///
/// let mut builder = GrammarBuilder::<()>::new();
/// let percent = builder.add(Node::int_range(0, 100).with_name("percent"));
/// let root = builder.add(
///     Node::keyword([
///         KeywordOption::new("set", 0).branch(percent),
///         KeywordOption::new("clear", 1),
///     ])
///     .with_name("command"),
/// );
/// let grammar = builder.build();
/// assert_eq!(grammar.len(), 2);
/// assert!(grammar.contains(root));
/// ```
pub struct GrammarBuilder<C = ()> {
    nodes: Vec<Node<C>>,
}

impl<C> GrammarBuilder<C> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node and return its id.
    ///
    /// Any `next`/branch ids the node carries should come from earlier `add`
    /// calls on this builder. Nothing is checked here; see
    /// [`Grammar::validate`].
    pub fn add(&mut self, node: Node<C>) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn build(self) -> Grammar<C> {
        Grammar::from_nodes(self.nodes)
    }
}

impl<C> Default for GrammarBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
