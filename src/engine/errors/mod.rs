//! Parse error handling
//!
//! - [`ParseErrorKind`] - what went wrong, with the original message wording
//! - [`ErrorCode`] - stable categorized code for each kind
//! - [`ParseError`] - kind plus token position, node and partial results

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, ParseErrorKind};

#[cfg(test)]
mod tests;
