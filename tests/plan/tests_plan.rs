//! Test plans built from rule catalogues.

use rstest::rstest;
use testgen::{
    InvalidDescriptor, LexerTestMethod, ParserTestMethod, PlanOptions, RuleSet, Sample, TestPlan,
    TestMethodDescriptor, check_start_rule,
};

use crate::helpers::grammar_fixtures::{EXPR, JAVA_SUBSET};

#[rstest]
#[case("prog")]
#[case("stat")]
#[case("expr")]
fn test_parser_rules_pass_check(#[case] rule: &str) {
    let method = ParserTestMethod::new("testIt", "Expr", rule).unwrap();
    assert!(check_start_rule(&method, &*EXPR).is_ok());
}

#[rstest]
#[case("ID", "D0202")]
#[case("WS", "D0202")]
#[case("atom", "D0201")]
fn test_bad_start_rules_fail_check(#[case] rule: &str, #[case] code: &str) {
    let method = ParserTestMethod::new("testIt", "Expr", rule).unwrap();
    let err = check_start_rule(&method, &*EXPR).unwrap_err();
    assert_eq!(err.code(), code);
    assert_eq!(err.field(), Some("start_rule"));
}

#[test]
fn test_plan_for_expr_grammar() {
    let plan = TestPlan::for_parser_rules(&EXPR, PlanOptions::default()).unwrap();

    let names: Vec<_> = plan.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, ["testProg", "testStat", "testExpr"]);
    for method in &plan {
        let method = method.as_parser().unwrap();
        assert!(check_start_rule(method, &*EXPR).is_ok());
    }
}

#[test]
fn test_plan_camel_cases_and_prefixes() {
    let options = PlanOptions::default().with_method_prefix("parse");
    let plan = TestPlan::for_parser_rules(&JAVA_SUBSET, options).unwrap();

    let names: Vec<_> = plan.iter().map(|m| m.name().to_string()).collect();
    assert_eq!(
        names,
        ["parseCompilationUnit", "parseTypeDeclaration", "parseClassBody"]
    );
    assert_eq!(plan.options().method_prefix, "parse");
}

#[test]
fn test_large_grammar_plan_keeps_declaration_order() {
    let rules: Vec<String> = (0..500).map(|i| format!("rule{i}")).collect();
    let catalogue = RuleSet::new("Big", &rules).unwrap();
    let plan = TestPlan::for_parser_rules(&catalogue, PlanOptions::default()).unwrap();

    assert_eq!(plan.len(), 500);
    let starts: Vec<_> = plan
        .iter()
        .map(|m| m.as_parser().unwrap().start_rule().to_string())
        .collect();
    assert_eq!(starts, rules);
}

#[test]
fn test_driver_mixes_kinds_and_groups_by_template() {
    let mut plan = TestPlan::for_parser_rules(&EXPR, PlanOptions::default()).unwrap();
    let lexer = LexerTestMethod::new("testIds", "Expr", Sample::new("a b", "ID ID")).unwrap();
    plan.push(lexer).unwrap();

    // same descriptor from a second pass over the grammar
    let again = ParserTestMethod::new("testExpr", "Expr", "expr").unwrap();
    assert!(!plan.push_parser(again, &*EXPR).unwrap());

    let groups = plan.by_template();
    assert_eq!(groups["ParserTestMethod"].len(), 3);
    assert_eq!(groups["LexerTestMethod"].len(), 1);
    assert_eq!(groups["LexerTestMethod"][0].input(), Some("a b"));
}

#[test]
fn test_wrong_grammar_rejected_by_plan() {
    let mut plan = TestPlan::new();
    let method = ParserTestMethod::new("testExpr", "Calc", "expr").unwrap();
    let err = plan.push_parser(method, &*EXPR).unwrap_err();
    assert!(matches!(err, InvalidDescriptor::GrammarMismatch { .. }));
    assert!(plan.is_empty());
}
