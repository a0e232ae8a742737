//! Grammar rule catalogues.
//!
//! Descriptors only name their grammar. Whether a start rule actually exists
//! is a question for whoever holds the grammar, exposed here through
//! [`GrammarRules`]. [`RuleSet`] is the in-memory catalogue drivers use when
//! they already have the rule list.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::base::{InvalidDescriptor, Name, Result};
use crate::descriptor::ParserTestMethod;

/// Whether a rule belongs to the parser or the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Parser,
    Lexer,
}

impl RuleKind {
    /// Lexer rule names start with an uppercase letter; everything else is a parser rule.
    pub fn of(rule: &Name) -> Self {
        if rule.initial().is_uppercase() {
            Self::Lexer
        } else {
            Self::Parser
        }
    }
}

/// The rules one grammar defines.
pub trait GrammarRules {
    fn grammar_name(&self) -> &Name;

    /// Kind of `rule`, or `None` if the grammar does not define it.
    fn rule_kind(&self, rule: &str) -> Option<RuleKind>;

    fn has_rule(&self, rule: &str) -> bool {
        self.rule_kind(rule).is_some()
    }
}

/// Rule names of a grammar in declaration order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    grammar_name: Name,
    rules: IndexSet<Name, FxBuildHasher>,
}

impl RuleSet {
    /// Build a catalogue; repeated rule names are kept once.
    pub fn new<I, S>(grammar_name: impl AsRef<str>, rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let grammar_name = Name::parse("grammar_name", grammar_name)?;
        let mut set = IndexSet::with_hasher(FxBuildHasher);
        for rule in rules {
            set.insert(Name::parse("rule", rule)?);
        }
        Ok(Self {
            grammar_name,
            rules: set,
        })
    }

    pub fn rules(&self) -> impl Iterator<Item = &Name> {
        self.rules.iter()
    }

    /// Rules a parser test can start from.
    pub fn parser_rules(&self) -> impl Iterator<Item = &Name> {
        self.rules
            .iter()
            .filter(|rule| RuleKind::of(rule) == RuleKind::Parser)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl GrammarRules for RuleSet {
    fn grammar_name(&self) -> &Name {
        &self.grammar_name
    }

    fn rule_kind(&self, rule: &str) -> Option<RuleKind> {
        self.rules.get(rule).map(RuleKind::of)
    }
}

/// Check that `method` starts at a parser rule of the grammar it names.
pub fn check_start_rule<G>(method: &ParserTestMethod, rules: &G) -> Result<()>
where
    G: GrammarRules + ?Sized,
{
    if method.grammar_name() != rules.grammar_name() {
        return Err(InvalidDescriptor::GrammarMismatch {
            expected: rules.grammar_name().to_string(),
            found: method.grammar_name().to_string(),
        });
    }
    match rules.rule_kind(method.start_rule().as_str()) {
        Some(RuleKind::Parser) => Ok(()),
        Some(RuleKind::Lexer) => Err(InvalidDescriptor::NotAParserRule {
            grammar: method.grammar_name().to_string(),
            rule: method.start_rule().to_string(),
        }),
        None => Err(InvalidDescriptor::UnknownRule {
            grammar: method.grammar_name().to_string(),
            rule: method.start_rule().to_string(),
        }),
    }
}
