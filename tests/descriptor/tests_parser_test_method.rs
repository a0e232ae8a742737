//! ParserTestMethod behaviour seen from a generator driver.

use rstest::rstest;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use testgen::{
    InvalidDescriptor, ParserTestMethod, TestMethod, TestMethodDescriptor, TestMethodKind,
};

#[rstest]
#[case("testSimpleExpr", "Expr", "expr")]
#[case("testStat", "Lang", "stat")]
#[case("test_compilation_unit", "JavaSubset", "compilation_unit")]
#[case("_t", "G", "_start")]
fn test_valid_triples_round_trip(#[case] name: &str, #[case] grammar: &str, #[case] rule: &str) {
    let method = ParserTestMethod::new(name, grammar, rule).unwrap();

    assert_eq!(method.name(), name);
    assert_eq!(method.grammar_name(), grammar);
    assert_eq!(method.start_rule(), rule);
}

#[rstest]
#[case("", "Expr", "expr", "name")]
#[case("testExpr", "", "expr", "grammar_name")]
#[case("testExpr", "Expr", "", "start_rule")]
fn test_empty_identifiers_rejected(
    #[case] name: &str,
    #[case] grammar: &str,
    #[case] rule: &str,
    #[case] field: &str,
) {
    let err = ParserTestMethod::new(name, grammar, rule).unwrap_err();
    assert!(matches!(err, InvalidDescriptor::Empty { .. }));
    assert_eq!(err.field(), Some(field));
}

#[rstest]
#[case("test expr", "Expr", "expr")]
#[case("testExpr", "Expr.g4", "expr")]
#[case("testExpr", "Expr", "1expr")]
fn test_malformed_identifiers_rejected(
    #[case] name: &str,
    #[case] grammar: &str,
    #[case] rule: &str,
) {
    let err = ParserTestMethod::new(name, grammar, rule).unwrap_err();
    assert_eq!(err.code(), "D0102");
}

#[test]
fn test_example_descriptor_has_no_sample_fields() {
    let method: TestMethod = ParserTestMethod::new("testSimpleExpr", "Expr", "expr")
        .unwrap()
        .into();

    assert_eq!(method.kind(), TestMethodKind::Parser);
    assert_eq!(method.grammar_name(), "Expr");
    assert_eq!(method.as_parser().unwrap().start_rule(), "expr");
    assert_eq!(method.input(), None);
    assert_eq!(method.expected_output(), None);
    assert_eq!(method.expected_errors(), None);
    assert_eq!(method.grammar_index(), None);
}

#[test]
fn test_distinct_start_rules_are_distinct_descriptors() {
    let stat = ParserTestMethod::new("testLang", "Lang", "stat").unwrap();
    let expr = ParserTestMethod::new("testLang", "Lang", "expr").unwrap();

    assert_ne!(stat, expr);
    let unique: HashSet<_> = [stat.clone(), expr.clone(), stat.clone()].into_iter().collect();
    assert_eq!(unique.len(), 2);
}

#[test]
fn test_descriptors_built_and_read_across_threads() {
    let rules = ["prog", "stat", "expr", "atom"];
    let handles: Vec<_> = rules
        .iter()
        .map(|rule| {
            let rule = rule.to_string();
            thread::spawn(move || {
                ParserTestMethod::new(format!("test_{rule}"), "Expr", &rule).unwrap()
            })
        })
        .collect();
    let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    let shared = Arc::new(built);
    let readers: Vec<_> = (0..rules.len())
        .map(|i| {
            let shared = Arc::clone(&shared);
            thread::spawn(move || shared[i].start_rule().to_string())
        })
        .collect();
    let seen: Vec<_> = readers.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(seen, rules);
}
