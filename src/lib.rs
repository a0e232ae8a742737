//! # syster-testgen
//!
//! Typed descriptors for generated grammar tests.
//!
//! A generator driver builds one descriptor per test it wants emitted, collects
//! them into a [`TestPlan`], and hands the plan to an emission stage that
//! renders each descriptor with the template for its kind.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange → JSON/YAML plan files (feature "interchange")
//!   ↓
//! plan        → Driver-side collection: dedup, rule checks, template grouping
//!   ↓
//! grammar     → Rule catalogues, start-rule cross-check
//!   ↓
//! descriptor  → TestMethod family (parser, lexer)
//!   ↓
//! base        → Primitives (Name, InvalidDescriptor)
//! ```

// ============================================================================
// MODULES (dependency order: base → descriptor → grammar → plan → interchange)
// ============================================================================

/// Foundation types: Name, InvalidDescriptor
pub mod base;

/// Descriptor family: ParserTestMethod, LexerTestMethod, TestMethod
pub mod descriptor;

/// Grammar rule catalogues and start-rule checks
pub mod grammar;

/// Test plans handed to the emission stage
pub mod plan;

/// Plan interchange formats: JSON, YAML
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export foundation types
pub use base::{InvalidDescriptor, Name, Result};

// Re-export the descriptor family and driver entry points
pub use descriptor::{
    LexerTestMethod, ParserTestMethod, Sample, TestMethod, TestMethodDescriptor, TestMethodKind,
};
pub use grammar::{GrammarRules, RuleKind, RuleSet, check_start_rule};
pub use plan::{PlanOptions, TestPlan, method_name_for_rule};
