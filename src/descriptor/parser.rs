//! Descriptor for "start parsing at rule R" tests.

use crate::base::{Name, Result};

use super::kind::TestMethodKind;
use super::method::TestMethodDescriptor;

/// One generated parser test: run the grammar's parser from `start_rule`.
///
/// Built once by the driver and never mutated. Whether `start_rule` exists
/// in the grammar is not checked here; see [`crate::grammar::check_start_rule`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "ParserTestMethodFields")
)]
pub struct ParserTestMethod {
    name: Name,
    grammar_name: Name,
    start_rule: Name,
}

impl ParserTestMethod {
    /// Validate and build a descriptor.
    ///
    /// Fails on the first of `name`, `grammar_name`, `start_rule` that is
    /// empty or not an identifier.
    pub fn new(
        name: impl AsRef<str>,
        grammar_name: impl AsRef<str>,
        start_rule: impl AsRef<str>,
    ) -> Result<Self> {
        let name = Name::parse("name", name)?;
        let grammar_name = Name::parse("grammar_name", grammar_name)?;
        let start_rule = Name::parse("start_rule", start_rule)?;
        Ok(Self::from_names(name, grammar_name, start_rule))
    }

    /// Build from names that are already validated.
    pub fn from_names(name: Name, grammar_name: Name, start_rule: Name) -> Self {
        tracing::trace!(
            "parser test method {} for {}::{}",
            name,
            grammar_name,
            start_rule
        );
        Self {
            name,
            grammar_name,
            start_rule,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn grammar_name(&self) -> &Name {
        &self.grammar_name
    }

    /// Rule the generated test starts parsing from.
    pub fn start_rule(&self) -> &Name {
        &self.start_rule
    }
}

impl TestMethodDescriptor for ParserTestMethod {
    fn name(&self) -> &Name {
        &self.name
    }

    fn grammar_name(&self) -> &Name {
        &self.grammar_name
    }

    fn kind(&self) -> TestMethodKind {
        TestMethodKind::Parser
    }
}

#[cfg(feature = "interchange")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ParserTestMethodFields {
    name: String,
    grammar_name: String,
    start_rule: String,
}

#[cfg(feature = "interchange")]
impl TryFrom<ParserTestMethodFields> for ParserTestMethod {
    type Error = crate::base::InvalidDescriptor;

    fn try_from(fields: ParserTestMethodFields) -> Result<Self> {
        Self::new(fields.name, fields.grammar_name, fields.start_rule)
    }
}
