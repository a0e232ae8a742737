//! Descriptor validation errors.
//!
//! Every failure while building a descriptor, or while a driver checks it
//! against a grammar, is an [`InvalidDescriptor`]. Codes follow `D{category}{number}`:
//! - D01xx: identifier problems (empty, malformed)
//! - D02xx: grammar cross-reference problems
//! - D03xx: plan conflicts

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = InvalidDescriptor> = std::result::Result<T, E>;

/// A descriptor that must not reach the emission stage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDescriptor {
    /// A required identifier was empty.
    #[error("invalid descriptor: {field} must not be empty")]
    Empty { field: &'static str },

    /// A required identifier contained characters no target language accepts.
    #[error("invalid descriptor: {field} `{value}` is not an identifier")]
    NotAnIdentifier { field: &'static str, value: String },

    /// The start rule is not defined by the grammar.
    #[error("invalid descriptor: grammar `{grammar}` has no rule `{rule}`")]
    UnknownRule { grammar: String, rule: String },

    /// The start rule is a lexer rule; parsing cannot begin there.
    #[error("invalid descriptor: `{rule}` is a lexer rule of grammar `{grammar}`")]
    NotAParserRule { grammar: String, rule: String },

    /// The descriptor was checked against the wrong grammar's rules.
    #[error("invalid descriptor: expected grammar `{expected}`, found `{found}`")]
    GrammarMismatch { expected: String, found: String },

    /// Two different descriptors claim the same test method name.
    #[error("invalid descriptor: test method `{name}` is already defined")]
    DuplicateMethod { name: String },
}

impl InvalidDescriptor {
    pub(crate) fn empty(field: &'static str) -> Self {
        Self::Empty { field }
    }

    pub(crate) fn not_an_identifier(field: &'static str, value: impl Into<String>) -> Self {
        Self::NotAnIdentifier {
            field,
            value: value.into(),
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "D0101",
            Self::NotAnIdentifier { .. } => "D0102",
            Self::UnknownRule { .. } => "D0201",
            Self::NotAParserRule { .. } => "D0202",
            Self::GrammarMismatch { .. } => "D0203",
            Self::DuplicateMethod { .. } => "D0301",
        }
    }

    /// The descriptor field at fault, when the error is about a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Empty { field } | Self::NotAnIdentifier { field, .. } => Some(*field),
            Self::UnknownRule { .. } | Self::NotAParserRule { .. } => Some("start_rule"),
            Self::GrammarMismatch { .. } => Some("grammar_name"),
            Self::DuplicateMethod { .. } => Some("name"),
        }
    }
}
