use std::fmt;

/// Which kind of test a descriptor generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum TestMethodKind {
    /// Parse sample input starting at a named rule.
    Parser,
    /// Tokenize sample input and compare the token stream.
    Lexer,
}

impl TestMethodKind {
    pub const ALL: [TestMethodKind; 2] = [Self::Parser, Self::Lexer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parser => "parser",
            Self::Lexer => "lexer",
        }
    }

    /// Template the emission stage renders for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::Parser => "ParserTestMethod",
            Self::Lexer => "LexerTestMethod",
        }
    }
}

impl fmt::Display for TestMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
