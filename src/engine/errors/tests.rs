//! Tests for the errors module

use super::*;
use crate::base::NodeId;
use crate::engine::{Value, Values};

#[test]
fn test_messages_follow_original_wording() {
    let cases = [
        (ParseErrorKind::MissingArguments, "Missing arguments."),
        (
            ParseErrorKind::InvalidInteger("soon".into()),
            "Not a valid integer: \"soon\"",
        ),
        (
            ParseErrorKind::OutOfRange {
                value: 150,
                min: 0,
                max: 100,
            },
            "Specified value 150 is not between 0 and 100 (inclusive).",
        ),
        (
            ParseErrorKind::UnknownKeyword("melt".into()),
            "Keyword \"melt\" is not in the keyword list.",
        ),
        (
            ParseErrorKind::AmbiguousKeyword("c".into()),
            "Keyword \"c\" matches too many keywords.",
        ),
        (ParseErrorKind::CallbackFailed("fan is broken".into()), "fan is broken"),
        (ParseErrorKind::UnusedArguments(2), "2 unused argument(s)."),
    ];

    for (kind, message) in cases {
        assert_eq!(kind.to_string(), message);
    }
}

#[test]
fn test_every_kind_has_a_code() {
    let kinds = [
        ParseErrorKind::MissingArguments,
        ParseErrorKind::InvalidInteger(String::new()),
        ParseErrorKind::OutOfRange {
            value: 0,
            min: 0,
            max: 0,
        },
        ParseErrorKind::UnknownKeyword(String::new()),
        ParseErrorKind::AmbiguousKeyword(String::new()),
        ParseErrorKind::CallbackFailed(String::new()),
        ParseErrorKind::InvalidInvocation(String::new()),
        ParseErrorKind::UnusedArguments(0),
    ];

    for kind in kinds {
        let code = kind.code();
        let s = code.as_str();
        assert!(s.starts_with('E'), "code {:?} doesn't start with E", code);
        assert_eq!(s.len(), 5);
        assert!(!code.default_message().is_empty());
        assert!(!code.category_description().is_empty());
    }
}

#[test]
fn test_parse_error_accessors() {
    let mut partial = Values::new();
    partial.record(NodeId::new(0), Value::String("fan".into()));

    let err = ParseError::new(ParseErrorKind::InvalidInteger("soon".into()), 1)
        .at_node(NodeId::new(1))
        .with_partial(partial.clone());

    assert_eq!(err.position(), 1);
    assert_eq!(err.node(), Some(NodeId::new(1)));
    assert_eq!(err.code(), ErrorCode::E0102);
    assert_eq!(err.partial(), &partial);
    assert_eq!(err.to_string(), "Not a valid integer: \"soon\"");
    assert_eq!(err.format(), "E0102 at argument 1: Not a valid integer: \"soon\"");
}
