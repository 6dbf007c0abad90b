//! # paramtree
//!
//! Grammar-driven parsing and usage rendering for positional command-line
//! arguments.
//!
//! A caller declares a grammar of string, integer, keyword and action nodes
//! once. The engine then walks a token stream along exactly one path through
//! that grammar, where keyword choices pick the branch, and the usage
//! renderer documents the same grammar without any tokens.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! usage     → Compact parameter list, detailed explanation, usage block
//!   ↓
//! engine    → process(), resolve_next(), per-parse Values, ParseError
//!   ↓
//! grammar   → Node arena, KeywordOption, GrammarBuilder, validation
//!   ↓
//! base      → Primitives (NodeId, IntRange)
//! ```
//!
//! ## Example
//!
//! ```
//! use paramtree::{Engine, GrammarBuilder, KeywordOption, Node, Value};
//!
//! let mut builder = GrammarBuilder::<()>::new();
//! let temp = builder.add(Node::int_range(-40, 120).with_name("temp"));
//! let root = builder.add(
//!     Node::keyword([
//!         KeywordOption::new("fan", 0).branch(temp),
//!         KeywordOption::new("off", 1),
//!     ])
//!     .with_name("oper"),
//! );
//! let grammar = builder.build();
//!
//! let parsed = Engine::default()
//!     .process(&grammar, root, &["fan", "72"], 0, &mut ())
//!     .unwrap();
//! assert_eq!(parsed.value(temp).and_then(Value::as_int), Some(72));
//! ```

// ============================================================================
// MODULES (dependency order: base → grammar → engine → usage)
// ============================================================================

/// Foundation types: NodeId, IntRange
pub mod base;

/// Grammar node model: arena, nodes, keyword options, builder
pub mod grammar;

/// Consumption and validation engine
pub mod engine;

/// Usage text rendering
pub mod usage;

pub use base::{IntRange, NodeId};
pub use engine::{
    Engine, EngineConfig, ErrorCode, MatchMode, ParseError, ParseErrorKind, Parsed, Trail, Value,
    Values, resolve_next,
};
pub use grammar::{Grammar, GrammarBuilder, GrammarIssue, KeywordOption, Node, NodeKind};
pub use usage::{Usage, explain, param_names};
