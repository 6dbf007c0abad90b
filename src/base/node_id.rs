use std::fmt;

/// Index of a node in a [`Grammar`](crate::grammar::Grammar) arena.
///
/// Ids are handed out by [`GrammarBuilder::add`](crate::grammar::GrammarBuilder::add)
/// in insertion order and never change afterwards. An id is only meaningful
/// for the grammar that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
