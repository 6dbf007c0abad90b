use crate::base::NodeId;
use crate::grammar::{Grammar, KeywordOption, NodeKind};

use super::values::Values;

/// The node that follows `id` on the path this parse has taken.
///
/// For a keyword node the branch of the option it matched wins over the
/// node's own `next`. A keyword node with no recorded value has no successor
/// yet, so this returns `None` for it.
pub fn resolve_next<C>(grammar: &Grammar<C>, values: &Values, id: NodeId) -> Option<NodeId> {
    let node = grammar.node(id)?;
    if let NodeKind::Keyword { options } = node.kind() {
        let index = values.get(id)?.keyword_index()?;
        if let Some(branch) = options.get(index).and_then(KeywordOption::branch_target) {
            return Some(branch);
        }
    }
    node.next()
}
