//! Shared fixtures and assertions for integration tests.

#![allow(dead_code)]

#[path = "../../demos/tempmon_grammar.rs"]
pub mod tempmon;

use once_cell::sync::Lazy;
use paramtree::{ParseError, ParseErrorKind};

#[allow(unused_imports)]
pub use tempmon::{Log, Tempmon};

/// Built once and shared, the way a program would keep its grammar in a
/// static.
pub static TEMPMON: Lazy<Tempmon> = Lazy::new(tempmon::build);

/// Assert that a parse failed at `position` with `kind`.
#[track_caller]
pub fn assert_fails_at<T: std::fmt::Debug>(
    result: Result<T, ParseError>,
    position: usize,
    kind: ParseErrorKind,
) {
    match result {
        Ok(parsed) => panic!("Expected failure at {position} ({kind}), parsed {parsed:?}"),
        Err(err) => {
            assert_eq!(err.kind(), &kind, "wrong error: {}", err.format());
            assert_eq!(err.position(), position, "wrong position: {}", err.format());
        }
    }
}
