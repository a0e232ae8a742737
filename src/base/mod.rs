//! Foundation types for the test generator.
//!
//! This module provides the types every other layer builds on:
//! - [`Name`] - Validated identifier (method, grammar and rule names)
//! - [`InvalidDescriptor`] - The single error kind raised while building descriptors
//!
//! This module has NO dependencies on other testgen modules.

mod error;
mod name;

pub use error::{InvalidDescriptor, Result};
pub use name::{Name, is_identifier};

// Re-export smol_str for callers that want to build names without allocation
pub use smol_str;
