//! Error code definitions for parse failures
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Argument errors (the supplied tokens do not fit the grammar)
//! - E02xx: Callback errors (a node handler rejected the arguments)
//! - E09xx: Invocation errors (the caller or grammar is at fault)

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Argument errors
    // =========================================================================
    /// Token stream ended before the grammar did
    E0101,
    /// Token is not an integer literal
    E0102,
    /// Integer outside the declared range
    E0103,
    /// Token matches no keyword option
    E0104,
    /// Token is a prefix of several keyword options
    E0105,
    /// Tokens left over after the grammar ended
    E0106,

    // =========================================================================
    // E02xx: Callback errors
    // =========================================================================
    /// A node callback reported failure
    E0201,

    // =========================================================================
    // E09xx: Invocation errors
    // =========================================================================
    /// Bad start node, start offset or grammar reference
    E0901,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0201 => "E0201",
            Self::E0901 => "E0901",
        }
    }

    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101
            | Self::E0102
            | Self::E0103
            | Self::E0104
            | Self::E0105
            | Self::E0106 => "argument error",
            Self::E0201 => "callback error",
            Self::E0901 => "invocation error",
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "missing arguments",
            Self::E0102 => "not a valid integer",
            Self::E0103 => "value out of range",
            Self::E0104 => "unknown keyword",
            Self::E0105 => "ambiguous keyword",
            Self::E0106 => "unused arguments",
            Self::E0201 => "callback failed",
            Self::E0901 => "invalid invocation",
        }
    }

    /// True when corrected input could make the parse succeed.
    pub fn is_argument_error(&self) -> bool {
        self.as_str().starts_with("E01")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E0104.to_string(), "E0104");
    }

    #[test]
    fn test_is_argument_error() {
        assert!(ErrorCode::E0101.is_argument_error());
        assert!(ErrorCode::E0106.is_argument_error());
        assert!(!ErrorCode::E0201.is_argument_error());
        assert!(!ErrorCode::E0901.is_argument_error());
    }
}
