//! Grammar nodes and keyword options.

use std::fmt;
use std::sync::Arc;

use smol_str::SmolStr;

use crate::base::{IntRange, NodeId};
use crate::engine::Trail;

/// Handler invoked once a node has been accepted.
///
/// The trail starts at the node the parse began with, so the handler can read
/// every value recorded so far. Returning `Err` aborts the parse with the
/// given message.
pub type Callback<C> = Arc<dyn Fn(&Trail<'_, C>, &mut C) -> Result<(), String> + Send + Sync>;

/// One acceptable value of a keyword node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordOption {
    name: SmolStr,
    value: i64,
    branch: Option<NodeId>,
}

impl KeywordOption {
    pub fn new(name: impl Into<SmolStr>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
            branch: None,
        }
    }

    /// Continue with `target` when this option is chosen, overriding the
    /// keyword node's own successor.
    pub fn branch(mut self, target: NodeId) -> Self {
        self.branch = Some(target);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn branch_target(&self) -> Option<NodeId> {
        self.branch
    }
}

/// What a node accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Any token, kept verbatim.
    String,
    /// A signed integer literal, optionally bounded.
    Integer { range: Option<IntRange> },
    /// One of a fixed list of names.
    Keyword { options: Vec<KeywordOption> },
    /// Consumes no token; exists to run its callback.
    Action,
}

impl NodeKind {
    pub fn consumes_token(&self) -> bool {
        !matches!(self, Self::Action)
    }

    /// Name used in usage text when the node has none of its own.
    pub fn label(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer { .. } => "integer",
            Self::Keyword { .. } => "keyword",
            Self::Action => "action",
        }
    }
}

/// A single parameter in a grammar.
pub struct Node<C = ()> {
    kind: NodeKind,
    next: Option<NodeId>,
    callback: Option<Callback<C>>,
    name: Option<SmolStr>,
    description: Option<SmolStr>,
}

impl<C> Node<C> {
    fn of(kind: NodeKind) -> Self {
        Self {
            kind,
            next: None,
            callback: None,
            name: None,
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::of(NodeKind::String)
    }

    pub fn integer() -> Self {
        Self::of(NodeKind::Integer { range: None })
    }

    /// Integer restricted to `min..=max`.
    pub fn int_range(min: i64, max: i64) -> Self {
        Self::of(NodeKind::Integer {
            range: Some(IntRange::new(min, max)),
        })
    }

    pub fn keyword(options: impl IntoIterator<Item = KeywordOption>) -> Self {
        Self::of(NodeKind::Keyword {
            options: options.into_iter().collect(),
        })
    }

    /// Callback-only node.
    pub fn action<F>(callback: F) -> Self
    where
        F: Fn(&Trail<'_, C>, &mut C) -> Result<(), String> + Send + Sync + 'static,
    {
        Self::of(NodeKind::Action).with_callback(callback)
    }

    pub fn with_name(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<SmolStr>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Unconditional successor.
    pub fn then(mut self, next: NodeId) -> Self {
        self.next = Some(next);
        self
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Trail<'_, C>, &mut C) -> Result<(), String> + Send + Sync + 'static,
    {
        self.callback = Some(Arc::new(callback));
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    pub fn callback(&self) -> Option<&Callback<C>> {
        self.callback.as_ref()
    }

    /// The node's name, if it has a non-empty one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    /// The node's description, if it has a non-empty one.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|desc| !desc.is_empty())
    }

    pub fn range(&self) -> Option<IntRange> {
        match &self.kind {
            NodeKind::Integer { range } => *range,
            _ => None,
        }
    }

    /// Keyword options; empty for every other kind.
    pub fn options(&self) -> &[KeywordOption] {
        match &self.kind {
            NodeKind::Keyword { options } => options,
            _ => &[],
        }
    }

    /// Every node id this node refers to, successor first.
    pub(crate) fn references(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.next
            .into_iter()
            .chain(self.options().iter().filter_map(KeywordOption::branch_target))
    }
}

impl<C> Clone for Node<C> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            next: self.next,
            callback: self.callback.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("kind", &self.kind)
            .field("next", &self.next)
            .field("callback", &self.callback.is_some())
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}
