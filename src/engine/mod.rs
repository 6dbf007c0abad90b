//! Token consumption and validation
//!
//! The engine walks a token stream against a [`Grammar`](crate::grammar::Grammar):
//!
//! ```text
//! tokens[start..]
//!     ↓
//! accept  → type check / convert one token per node (Action nodes take none)
//!     ↓
//! Values  → per-parse side table, keyed by NodeId, in consumption order
//!     ↓
//! callback(Trail, ctx)
//!     ↓
//! resolve_next → matched option's branch, else the node's own `next`
//! ```
//!
//! The first failure stops the walk; values accepted before it are returned
//! with the error.

mod config;
pub mod errors;
mod keyword;
mod literal;
mod process;
mod resolve;
mod trail;
mod values;

pub use config::{EngineConfig, MatchMode};
pub use errors::{ErrorCode, ParseError, ParseErrorKind};
pub use literal::parse_integer;
pub use process::{Engine, Parsed};
pub use resolve::resolve_next;
pub use trail::{Step, Trail, Walk};
pub use values::{Value, Values};
