use crate::base::{Name, Result};

/// Method name for a test starting at `rule`: `prefix` + UpperCamel(`rule`).
///
/// `expr` becomes `testExpr`, `compilation_unit` becomes `testCompilationUnit`.
pub fn method_name_for_rule(prefix: &str, rule: &Name) -> Result<Name> {
    let mut name = String::with_capacity(prefix.len() + rule.as_str().len());
    name.push_str(prefix);
    for segment in rule.as_str().split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    Name::parse("name", name)
}
