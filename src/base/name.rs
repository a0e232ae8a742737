//! Validated identifiers.
//!
//! Test method, grammar and rule names all end up as identifiers in
//! generated source, so they share one representation. `Name` wraps a
//! `SmolStr`: short names stay inline and clones never allocate.

use std::borrow::Borrow;
use std::fmt;

use smol_str::SmolStr;
use unicode_ident::{is_xid_continue, is_xid_start};

use super::error::{InvalidDescriptor, Result};

/// Returns true if `s` is a non-empty Unicode identifier (`_` allowed as a start).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || is_xid_start(c) => chars.all(is_xid_continue),
        _ => false,
    }
}

/// An identifier that has passed [`is_identifier`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize), serde(transparent))]
pub struct Name(SmolStr);

impl Name {
    /// Validate `value` as the identifier held by `field`.
    pub fn parse(field: &'static str, value: impl AsRef<str>) -> Result<Self> {
        let value = value.as_ref();
        if value.is_empty() {
            return Err(InvalidDescriptor::empty(field));
        }
        if !is_identifier(value) {
            return Err(InvalidDescriptor::not_an_identifier(field, value));
        }
        Ok(Self(SmolStr::new(value)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character, used to classify rule names.
    pub(crate) fn initial(&self) -> char {
        // Validated names are never empty.
        self.0.chars().next().unwrap_or('_')
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Name {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Name {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
