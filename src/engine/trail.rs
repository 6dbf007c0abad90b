//! Read-only view of a parse in progress (or finished).

use crate::base::NodeId;
use crate::grammar::{Grammar, Node};

use super::resolve::resolve_next;
use super::values::{Value, Values};

/// The grammar, the values recorded so far, and the node the parse started at.
///
/// Callbacks receive one of these; [`Parsed::trail`](super::Parsed::trail)
/// builds one after the fact.
pub struct Trail<'a, C> {
    grammar: &'a Grammar<C>,
    values: &'a Values,
    start: NodeId,
}

impl<'a, C> Trail<'a, C> {
    pub(crate) fn new(grammar: &'a Grammar<C>, values: &'a Values, start: NodeId) -> Self {
        Self {
            grammar,
            values,
            start,
        }
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn grammar(&self) -> &'a Grammar<C> {
        self.grammar
    }

    pub fn values(&self) -> &'a Values {
        self.values
    }

    pub fn value(&self, id: NodeId) -> Option<&'a Value> {
        self.values.get(id)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        resolve_next(self.grammar, self.values, id)
    }

    /// Nodes along the taken path, starting at the start node.
    pub fn walk(&self) -> Walk<'a, C> {
        Walk {
            trail: *self,
            current: Some(self.start),
            remaining: self.grammar.len(),
        }
    }

    /// Value of the `n`th node along the path (0 is the start node).
    pub fn nth_value(&self, n: usize) -> Option<&'a Value> {
        self.walk().nth(n).and_then(|step| step.value)
    }
}

impl<C> Clone for Trail<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Trail<'_, C> {}

/// One node visited by [`Walk`].
pub struct Step<'a, C> {
    pub id: NodeId,
    pub node: &'a Node<C>,
    /// `None` once the walk reaches a node the parse never got to accept.
    pub value: Option<&'a Value>,
}

/// Iterator over the path a parse took.
///
/// Stops after the first node without a recorded value, and never yields
/// more steps than the grammar has nodes.
pub struct Walk<'a, C> {
    trail: Trail<'a, C>,
    current: Option<NodeId>,
    remaining: usize,
}

impl<'a, C> Iterator for Walk<'a, C> {
    type Item = Step<'a, C>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.current?;
        let node = self.trail.grammar.node(id)?;
        self.remaining -= 1;

        let value = self.trail.values.get(id);
        self.current = value.and_then(|_| self.trail.next(id));
        Some(Step { id, node, value })
    }
}
