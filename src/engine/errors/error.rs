//! Parse error types

use thiserror::Error;

use crate::base::NodeId;
use crate::engine::Values;

use super::codes::ErrorCode;

/// Why a parse stopped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("Missing arguments.")]
    MissingArguments,

    #[error("Not a valid integer: \"{0}\"")]
    InvalidInteger(String),

    #[error("Specified value {value} is not between {min} and {max} (inclusive).")]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Keyword \"{0}\" is not in the keyword list.")]
    UnknownKeyword(String),

    #[error("Keyword \"{0}\" matches too many keywords.")]
    AmbiguousKeyword(String),

    /// Carries the callback's own message.
    #[error("{0}")]
    CallbackFailed(String),

    #[error("{0}")]
    InvalidInvocation(String),

    #[error("{0} unused argument(s).")]
    UnusedArguments(usize),
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingArguments => ErrorCode::E0101,
            Self::InvalidInteger(_) => ErrorCode::E0102,
            Self::OutOfRange { .. } => ErrorCode::E0103,
            Self::UnknownKeyword(_) => ErrorCode::E0104,
            Self::AmbiguousKeyword(_) => ErrorCode::E0105,
            Self::UnusedArguments(_) => ErrorCode::E0106,
            Self::CallbackFailed(_) => ErrorCode::E0201,
            Self::InvalidInvocation(_) => ErrorCode::E0901,
        }
    }
}

/// A failed parse.
///
/// Provides:
/// - The token index the failure is attributed to
/// - The grammar node being processed, when there was one
/// - The error kind and its message
/// - Every value accepted before the failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    position: usize,
    node: Option<NodeId>,
    kind: ParseErrorKind,
    partial: Values,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self {
            position,
            node: None,
            kind,
            partial: Values::default(),
        }
    }

    pub(crate) fn invalid_invocation(message: impl Into<String>, position: usize) -> Self {
        Self::new(ParseErrorKind::InvalidInvocation(message.into()), position)
    }

    pub fn at_node(mut self, node: NodeId) -> Self {
        self.node = Some(node);
        self
    }

    pub fn with_partial(mut self, partial: Values) -> Self {
        self.partial = partial;
        self
    }

    /// Index into the token slice.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Values accepted before the failure, including the failing node's own
    /// value when a callback rejected it.
    pub fn partial(&self) -> &Values {
        &self.partial
    }

    /// Format the error for display
    pub fn format(&self) -> String {
        format!("{} at argument {}: {}", self.code(), self.position, self.kind)
    }
}
