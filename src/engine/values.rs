//! Per-parse result table.

use std::fmt;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::base::NodeId;
use crate::grammar::Grammar;

use super::resolve::resolve_next;

/// What a node accepted during one parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String(String),
    Integer { raw: String, value: i64 },
    /// `value` is the option's associated integer, `index` its position in
    /// the node's option list.
    Keyword { raw: String, value: i64, index: usize },
    Action,
}

impl Value {
    /// The token exactly as supplied. `None` for actions.
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::String(raw) | Self::Integer { raw, .. } | Self::Keyword { raw, .. } => Some(raw.as_str()),
            Self::Action => None,
        }
    }

    /// Converted value of an integer or keyword.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Integer { value, .. } | Self::Keyword { value, .. } => Some(*value),
            _ => None,
        }
    }

    pub fn keyword_index(&self) -> Option<usize> {
        match self {
            Self::Keyword { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(raw) => write!(f, "string: \"{raw}\""),
            Self::Integer { raw, value } => write!(f, "int: \"{raw}\" = {value}"),
            Self::Keyword { raw, value, index } => {
                write!(f, "keyword: \"{raw}\" = {value} [{index}]")
            }
            Self::Action => write!(f, "action:"),
        }
    }
}

/// Values recorded during one parse, in the order nodes were accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    entries: IndexMap<NodeId, Value, FxBuildHasher>,
}

impl Values {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: NodeId) -> Option<&Value> {
        self.entries.get(&id)
    }

    pub(crate) fn record(&mut self, id: NodeId, value: Value) {
        self.entries.insert(id, value);
    }

    /// Successor of an accepted node; see [`resolve_next`].
    pub fn next<C>(&self, grammar: &Grammar<C>, id: NodeId) -> Option<NodeId> {
        resolve_next(grammar, self, id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Value)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }
}
