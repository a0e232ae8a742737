use crate::base::Name;
#[cfg(feature = "interchange")]
use crate::base::Result;

use super::kind::TestMethodKind;
use super::lexer::LexerTestMethod;
use super::parser::ParserTestMethod;

/// Read access shared by every generated test method.
///
/// The optional accessors cover parameters only some kinds use; a kind
/// that has no use for one reports `None`.
pub trait TestMethodDescriptor {
    /// Identifier of the generated test method.
    fn name(&self) -> &Name;

    /// Grammar under test.
    fn grammar_name(&self) -> &Name;

    fn kind(&self) -> TestMethodKind;

    /// Text fed to the generated test.
    fn input(&self) -> Option<&str> {
        None
    }

    /// Expected stdout of the generated test.
    fn expected_output(&self) -> Option<&str> {
        None
    }

    /// Expected stderr of the generated test.
    fn expected_errors(&self) -> Option<&str> {
        None
    }

    fn grammar_index(&self) -> Option<u32> {
        None
    }
}

/// Any generated test method.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum TestMethod {
    Parser(ParserTestMethod),
    Lexer(LexerTestMethod),
}

impl TestMethod {
    pub fn as_parser(&self) -> Option<&ParserTestMethod> {
        match self {
            Self::Parser(method) => Some(method),
            Self::Lexer(_) => None,
        }
    }

    pub fn as_lexer(&self) -> Option<&LexerTestMethod> {
        match self {
            Self::Lexer(method) => Some(method),
            Self::Parser(_) => None,
        }
    }

    /// Shorthand for `kind().template_name()`.
    pub fn template_name(&self) -> &'static str {
        self.kind().template_name()
    }

    fn as_descriptor(&self) -> &dyn TestMethodDescriptor {
        match self {
            Self::Parser(method) => method,
            Self::Lexer(method) => method,
        }
    }
}

impl TestMethodDescriptor for TestMethod {
    fn name(&self) -> &Name {
        self.as_descriptor().name()
    }

    fn grammar_name(&self) -> &Name {
        self.as_descriptor().grammar_name()
    }

    fn kind(&self) -> TestMethodKind {
        self.as_descriptor().kind()
    }

    fn input(&self) -> Option<&str> {
        self.as_descriptor().input()
    }

    fn expected_output(&self) -> Option<&str> {
        self.as_descriptor().expected_output()
    }

    fn expected_errors(&self) -> Option<&str> {
        self.as_descriptor().expected_errors()
    }

    fn grammar_index(&self) -> Option<u32> {
        self.as_descriptor().grammar_index()
    }
}

impl From<ParserTestMethod> for TestMethod {
    fn from(method: ParserTestMethod) -> Self {
        Self::Parser(method)
    }
}

impl From<LexerTestMethod> for TestMethod {
    fn from(method: LexerTestMethod) -> Self {
        Self::Lexer(method)
    }
}

/// Descriptor as read from a plan file, before validation.
#[cfg(feature = "interchange")]
#[derive(serde::Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum TestMethodFields {
    Parser(super::parser::ParserTestMethodFields),
    Lexer(super::lexer::LexerTestMethodFields),
}

#[cfg(feature = "interchange")]
impl TestMethodFields {
    /// Run the constructor checks for the tagged kind.
    pub(crate) fn build(self) -> Result<TestMethod> {
        Ok(match self {
            Self::Parser(fields) => ParserTestMethod::try_from(fields)?.into(),
            Self::Lexer(fields) => LexerTestMethod::try_from(fields)?.into(),
        })
    }
}
