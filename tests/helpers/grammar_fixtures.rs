//! Rule catalogues for the grammars the tests generate against.

use once_cell::sync::Lazy;
use testgen::RuleSet;

/// Small expression grammar: three parser rules, three lexer rules.
pub static EXPR: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new("Expr", ["prog", "stat", "expr", "ID", "INT", "WS"]).unwrap()
});

/// Grammar whose rule names need camel-casing.
pub static JAVA_SUBSET: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::new(
        "JavaSubset",
        [
            "compilation_unit",
            "type_declaration",
            "class_body",
            "Identifier",
            "IntegerLiteral",
        ],
    )
    .unwrap()
});
