//! Optional structural checks on a finished grammar.
//!
//! The engine never runs these itself: a malformed grammar surfaces as an
//! ordinary parse error instead. Call [`Grammar::validate`] from a test or at
//! startup to catch mistakes early.

use rustc_hash::FxHashSet;
use smol_str::SmolStr;
use thiserror::Error;

use crate::base::NodeId;

use super::{Grammar, NodeKind};

/// A structural problem found by [`Grammar::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarIssue {
    #[error("keyword node {node} has no options")]
    EmptyKeyword { node: NodeId },

    #[error("keyword node {node} lists \"{name}\" more than once")]
    DuplicateOption { node: NodeId, name: SmolStr },

    /// The shorter option can never be selected in prefix mode.
    #[error("keyword node {node}: \"{shorter}\" is a prefix of \"{longer}\"")]
    PrefixOverlap {
        node: NodeId,
        shorter: SmolStr,
        longer: SmolStr,
    },

    #[error("integer node {node} has an empty range {min}-{max}")]
    InvertedRange { node: NodeId, min: i64, max: i64 },

    #[error("node {from} refers to {to}, which is not in the grammar")]
    DanglingReference { from: NodeId, to: NodeId },

    /// Points at a node added later, which is how reference cycles start.
    #[error("node {from} refers forward to {to}")]
    ForwardReference { from: NodeId, to: NodeId },
}

impl<C> Grammar<C> {
    /// Check every node for structural problems.
    pub fn validate(&self) -> Vec<GrammarIssue> {
        let mut issues = Vec::new();

        for (id, node) in self.iter() {
            for to in node.references() {
                if !self.contains(to) {
                    issues.push(GrammarIssue::DanglingReference { from: id, to });
                } else if to >= id {
                    issues.push(GrammarIssue::ForwardReference { from: id, to });
                }
            }

            match node.kind() {
                NodeKind::Integer { range: Some(range) } if range.is_inverted() => {
                    issues.push(GrammarIssue::InvertedRange {
                        node: id,
                        min: range.min,
                        max: range.max,
                    });
                }
                NodeKind::Keyword { options } if options.is_empty() => {
                    issues.push(GrammarIssue::EmptyKeyword { node: id });
                }
                NodeKind::Keyword { options } => {
                    let mut seen = FxHashSet::default();
                    for option in options {
                        if !seen.insert(option.name()) {
                            issues.push(GrammarIssue::DuplicateOption {
                                node: id,
                                name: option.name().into(),
                            });
                        }
                    }
                    for (i, a) in options.iter().enumerate() {
                        for b in &options[i + 1..] {
                            let (shorter, longer) = if a.name().len() <= b.name().len() {
                                (a, b)
                            } else {
                                (b, a)
                            };
                            if shorter.name() != longer.name()
                                && longer.name().starts_with(shorter.name())
                            {
                                issues.push(GrammarIssue::PrefixOverlap {
                                    node: id,
                                    shorter: shorter.name().into(),
                                    longer: longer.name().into(),
                                });
                            }
                        }
                    }
                }
                _ => {}
            }
        }

        issues
    }
}
