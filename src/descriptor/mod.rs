//! Test method descriptors.
//!
//! A descriptor is an immutable record of everything the emission stage
//! needs to render one generated test method. The family is closed:
//!
//! ```text
//! TestMethod
//!   ├── Parser(ParserTestMethod)  grammar + start rule
//!   └── Lexer(LexerTestMethod)    grammar + sample input/output
//! ```
//!
//! Each variant carries only the fields its kind of test uses. Shared
//! read access goes through [`TestMethodDescriptor`]; emission picks a
//! template by matching on [`TestMethod`] or via [`TestMethodKind::template_name`].

mod kind;
mod lexer;
mod method;
mod parser;

pub use kind::TestMethodKind;
pub use lexer::{LexerTestMethod, Sample};
pub use method::{TestMethod, TestMethodDescriptor};
pub use parser::ParserTestMethod;

#[cfg(feature = "interchange")]
pub(crate) use method::TestMethodFields;
