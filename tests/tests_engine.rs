//! Engine Tests - token consumption against the temperature monitor grammar
//! and small ad-hoc grammars.

#[path = "helpers/mod.rs"]
mod helpers;

use helpers::{TEMPMON, assert_fails_at, tempmon};
use paramtree::{
    Engine, EngineConfig, GrammarBuilder, KeywordOption, MatchMode, Node, ParseErrorKind, Value,
};
use rstest::rstest;

fn run(tokens: &[&str]) -> (Result<paramtree::Parsed, paramtree::ParseError>, Vec<String>) {
    let mut log = Vec::new();
    let result = Engine::default().process(&TEMPMON.grammar, TEMPMON.root, tokens, 0, &mut log);
    (result, log)
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_fan_invokes_units_callback() {
    let (result, log) = run(&["fan", "72", "kelvin"]);
    let parsed = result.unwrap();

    assert_eq!(log, vec!["Set fan on at or above 72 degrees kelvin (0)."]);
    assert_eq!(
        parsed.value(TEMPMON.fan_temp),
        Some(&Value::Integer {
            raw: "72".into(),
            value: 72
        })
    );
    assert_eq!(
        parsed.value(TEMPMON.fan_units).and_then(Value::keyword_index),
        Some(0)
    );
    assert_eq!(parsed.last_index(), Some(2));
}

#[test]
fn test_fan_with_bad_temperature() {
    let (result, log) = run(&["fan", "soon", "kelvin"]);
    assert!(log.is_empty());
    assert_fails_at(result, 1, ParseErrorKind::InvalidInteger("soon".into()));
}

#[test]
fn test_unknown_operation() {
    let (result, _) = run(&["melt"]);
    assert_fails_at(result, 0, ParseErrorKind::UnknownKeyword("melt".into()));
}

#[rstest]
#[case(&["on"], "Set temperature monitoring ON.")]
#[case(&["of"], "Set temperature monitoring OFF.")]
#[case(&["h", "10", "c"], "Set heater on at or below 10 degrees c (1).")]
#[case(&["range", "-5", "0x1e", "farenheit"], "Signal alarm below -5 or above 30 degrees farenheit (2).")]
#[case(&["alarm", "hi"], "Set alarm level to hi (2).")]
fn test_operations(#[case] tokens: &[&str], #[case] expected: &str) {
    let (result, log) = run(tokens);
    assert!(result.is_ok(), "{:?}", result.err().map(|e| e.format()));
    assert_eq!(log, vec![expected.to_owned()]);
}

#[test]
fn test_ambiguous_operation_prefix() {
    // "o" is a prefix of both "on" and "off"
    let (result, _) = run(&["o"]);
    assert_fails_at(result, 0, ParseErrorKind::AmbiguousKeyword("o".into()));
}

#[test]
fn test_missing_units() {
    let (result, log) = run(&["fan", "72"]);
    assert!(log.is_empty());
    assert_fails_at(result, 2, ParseErrorKind::MissingArguments);
}

#[test]
fn test_callback_rejection() {
    let (result, log) = run(&["range", "30", "10", "kelvin"]);
    assert!(log.is_empty());
    assert_fails_at(
        result,
        3,
        ParseErrorKind::CallbackFailed("Minimum 30 is above maximum 10.".into()),
    );
}

#[test]
fn test_partial_values_on_failure() {
    let (result, _) = run(&["fan", "72", "rankine"]);
    let err = result.unwrap_err();
    let partial: Vec<String> = err.partial().iter().map(|(_, v)| v.to_string()).collect();
    assert_eq!(
        partial,
        vec![
            "keyword: \"fan\" = 2 [2]".to_owned(),
            "int: \"72\" = 72".to_owned()
        ]
    );
}

#[test]
fn test_walk_reports_path_in_demo_format() {
    let (result, _) = run(&["fan", "0x48", "k"]);
    let parsed = result.unwrap();
    let report: Vec<String> = parsed
        .walk(&TEMPMON.grammar)
        .filter_map(|step| step.value.map(ToString::to_string))
        .collect();
    assert_eq!(
        report,
        vec![
            "keyword: \"fan\" = 2 [2]",
            "int: \"0x48\" = 72",
            "keyword: \"k\" = 0 [0]",
        ]
    );
}

#[test]
fn test_action_path_reports_action() {
    let (result, _) = run(&["on"]);
    let parsed = result.unwrap();
    let last = parsed.walk(&TEMPMON.grammar).last().unwrap();
    assert_eq!(last.value, Some(&Value::Action));
    assert_eq!(parsed.next_index(), 1);
}

#[test]
fn test_idempotent_reprocessing() {
    let (first, first_log) = run(&["heater", "5", "celcius"]);
    let (second, second_log) = run(&["heater", "5", "celcius"]);
    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(first_log, second_log);
}

// ============================================================================
// Matching modes
// ============================================================================

#[test]
fn test_exact_mode_requires_full_names() {
    let exact = Engine::new(EngineConfig::exact().with_actions(true));
    let mut log = Vec::new();

    let err = exact
        .process(&TEMPMON.grammar, TEMPMON.root, &["fa"], 0, &mut log)
        .unwrap_err();
    assert_eq!(err.kind(), &ParseErrorKind::UnknownKeyword("fa".into()));

    exact
        .process(&TEMPMON.grammar, TEMPMON.root, &["fan", "1", "celcius"], 0, &mut log)
        .unwrap();
    assert_eq!(log, vec!["Set fan on at or above 1 degrees celcius (1)."]);
}

#[rstest]
#[case(MatchMode::Exact, "celsius", Ok(1))]
#[case(MatchMode::Exact, "c", Err(ParseErrorKind::UnknownKeyword("c".into())))]
#[case(MatchMode::Prefix, "c", Err(ParseErrorKind::AmbiguousKeyword("c".into())))]
#[case(MatchMode::Prefix, "cels", Ok(1))]
#[case(MatchMode::Prefix, "", Err(ParseErrorKind::AmbiguousKeyword("".into())))]
fn test_keyword_modes(
    #[case] mode: MatchMode,
    #[case] token: &str,
    #[case] expected: Result<usize, ParseErrorKind>,
) {
    let mut builder = GrammarBuilder::<()>::new();
    let root = builder.add(Node::keyword([
        KeywordOption::new("celcius", 10),
        KeywordOption::new("celsius", 11),
    ]));
    let grammar = builder.build();

    let engine = Engine::new(EngineConfig::default().with_match_mode(mode));
    let result = engine
        .process(&grammar, root, &[token], 0, &mut ())
        .map(|parsed| parsed.value(root).and_then(Value::keyword_index).unwrap())
        .map_err(|err| err.kind().clone());
    assert_eq!(result, expected);
}

#[test]
fn test_empty_token_single_option() {
    let mut builder = GrammarBuilder::<()>::new();
    let root = builder.add(Node::keyword([KeywordOption::new("only", 7)]));
    let grammar = builder.build();

    let parsed = Engine::default()
        .process(&grammar, root, &[""], 0, &mut ())
        .unwrap();
    assert_eq!(parsed.value(root).and_then(Value::as_int), Some(7));
}

// ============================================================================
// Chaining grammars over one token stream
// ============================================================================

#[test]
fn test_chaining_with_next_index() {
    let mut builder = GrammarBuilder::<()>::new();
    let int2 = builder.add(Node::integer().with_name("int2"));
    let int1 = builder.add(Node::integer().with_name("int1").then(int2));
    let percent = builder.add(Node::int_range(0, 100).with_name("percent"));
    let grammar = builder.build();

    let tokens = ["--intint", "3", "4", "--percent", "100"];
    let engine = Engine::default();

    let first = engine.process(&grammar, int1, &tokens, 1, &mut ()).unwrap();
    assert_eq!(first.last_index(), Some(2));
    assert_eq!(tokens[first.next_index()], "--percent");

    let second = engine
        .process(&grammar, percent, &tokens, first.next_index() + 1, &mut ())
        .unwrap();
    assert_eq!(second.value(percent).and_then(Value::as_int), Some(100));
    assert_eq!(second.next_index(), tokens.len());
}

#[test]
fn test_owned_string_tokens() {
    let args: Vec<String> = ["alarm", "medium"].iter().map(|s| s.to_string()).collect();
    let mut log = tempmon::Log::new();
    Engine::default()
        .process(&TEMPMON.grammar, TEMPMON.root, &args, 0, &mut log)
        .unwrap();
    assert_eq!(log, vec!["Set alarm level to medium (1)."]);
}

#[test]
fn test_fixture_grammar_is_clean() {
    assert!(TEMPMON.grammar.validate().is_empty());
}
