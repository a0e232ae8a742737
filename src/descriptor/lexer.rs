//! Descriptor for token-stream tests.

use crate::base::{Name, Result};

use super::kind::TestMethodKind;
use super::method::TestMethodDescriptor;

/// Sample input for a generated test and what running it should print.
///
/// Empty strings are meaningful here: lexing empty input is a valid test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Sample {
    pub input: String,
    pub expected_output: String,
    #[cfg_attr(
        feature = "interchange",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub expected_errors: Option<String>,
}

impl Sample {
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
            expected_errors: None,
        }
    }

    /// Set the diagnostics the generated test expects on stderr.
    pub fn with_expected_errors(mut self, errors: impl Into<String>) -> Self {
        self.expected_errors = Some(errors.into());
        self
    }
}

/// One generated lexer test: tokenize `sample.input` with the grammar's lexer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", try_from = "LexerTestMethodFields")
)]
pub struct LexerTestMethod {
    name: Name,
    grammar_name: Name,
    sample: Sample,
    #[cfg_attr(feature = "interchange", serde(skip_serializing_if = "Option::is_none"))]
    grammar_index: Option<u32>,
}

impl LexerTestMethod {
    pub fn new(
        name: impl AsRef<str>,
        grammar_name: impl AsRef<str>,
        sample: Sample,
    ) -> Result<Self> {
        let name = Name::parse("name", name)?;
        let grammar_name = Name::parse("grammar_name", grammar_name)?;
        tracing::trace!("lexer test method {} for {}", name, grammar_name);
        Ok(Self {
            name,
            grammar_name,
            sample,
            grammar_index: None,
        })
    }

    /// Distinguish one of several grammars that share this test's name.
    pub fn with_grammar_index(mut self, index: u32) -> Self {
        self.grammar_index = Some(index);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn grammar_name(&self) -> &Name {
        &self.grammar_name
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }

    pub fn grammar_index(&self) -> Option<u32> {
        self.grammar_index
    }
}

impl TestMethodDescriptor for LexerTestMethod {
    fn name(&self) -> &Name {
        &self.name
    }

    fn grammar_name(&self) -> &Name {
        &self.grammar_name
    }

    fn kind(&self) -> TestMethodKind {
        TestMethodKind::Lexer
    }

    fn input(&self) -> Option<&str> {
        Some(&self.sample.input)
    }

    fn expected_output(&self) -> Option<&str> {
        Some(&self.sample.expected_output)
    }

    fn expected_errors(&self) -> Option<&str> {
        self.sample.expected_errors.as_deref()
    }

    fn grammar_index(&self) -> Option<u32> {
        self.grammar_index
    }
}

#[cfg(feature = "interchange")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LexerTestMethodFields {
    name: String,
    grammar_name: String,
    sample: Sample,
    #[serde(default)]
    grammar_index: Option<u32>,
}

#[cfg(feature = "interchange")]
impl TryFrom<LexerTestMethodFields> for LexerTestMethod {
    type Error = crate::base::InvalidDescriptor;

    fn try_from(fields: LexerTestMethodFields) -> Result<Self> {
        let method = Self::new(fields.name, fields.grammar_name, fields.sample)?;
        Ok(match fields.grammar_index {
            Some(index) => method.with_grammar_index(index),
            None => method,
        })
    }
}
