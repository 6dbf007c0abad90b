//! Concurrency Tests - many parses sharing one grammar
//!
//! Results are kept per parse, so a single `&Grammar` can serve parallel
//! parses without locking.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::TEMPMON;
use paramtree::{Engine, Value};
use rayon::prelude::*;

#[test]
fn test_parallel_parses_are_independent() {
    let engine = Engine::default();

    let results: Vec<(i64, Option<i64>, Vec<String>)> = (0..256i64)
        .into_par_iter()
        .map(|temp| {
            let tokens = ["fan".to_owned(), temp.to_string(), "farenheit".to_owned()];
            let mut log = Vec::new();
            let parsed = engine
                .process(&TEMPMON.grammar, TEMPMON.root, &tokens, 0, &mut log)
                .unwrap();
            let seen = parsed.value(TEMPMON.fan_temp).and_then(Value::as_int);
            (temp, seen, log)
        })
        .collect();

    for (temp, seen, log) in results {
        assert_eq!(seen, Some(temp));
        assert_eq!(
            log,
            vec![format!(
                "Set fan on at or above {temp} degrees farenheit (2)."
            )]
        );
    }
}

#[test]
fn test_cloned_grammar_parses_the_same() {
    let copy = TEMPMON.grammar.clone();
    let engine = Engine::default();
    let tokens = ["heater", "-3", "kelvin"];

    let mut original_log = Vec::new();
    let mut copy_log = Vec::new();
    let original = engine
        .process(&TEMPMON.grammar, TEMPMON.root, &tokens, 0, &mut original_log)
        .unwrap();
    let cloned = engine
        .process(&copy, TEMPMON.root, &tokens, 0, &mut copy_log)
        .unwrap();

    assert_eq!(original, cloned);
    assert_eq!(original_log, copy_log);
}
