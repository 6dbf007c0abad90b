//! Foundation types for the paramtree engine.
//!
//! This module provides the small value types shared by every other layer:
//! - [`NodeId`] - Stable index of a node inside a grammar arena
//! - [`IntRange`] - Inclusive bound for integer parameters
//!
//! This module has NO dependencies on other paramtree modules.

mod node_id;
mod range;

pub use node_id::NodeId;
pub use range::IntRange;
