//! Test plans.
//!
//! A plan is what a generator driver hands to the emission stage: every
//! descriptor it wants rendered, keyed by method name, in the order they
//! were added. Nothing enters a plan without passing validation, so the
//! emission stage never sees a malformed descriptor.

mod naming;
mod options;

use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use rayon::prelude::*;
use rustc_hash::FxBuildHasher;

use crate::base::{InvalidDescriptor, Name, Result};
use crate::descriptor::{ParserTestMethod, TestMethod, TestMethodDescriptor, TestMethodKind};
use crate::grammar::{GrammarRules, RuleSet, check_start_rule};

pub use naming::method_name_for_rule;
pub use options::PlanOptions;

/// Ordered, duplicate-free collection of test method descriptors.
#[derive(Debug, Clone, Default)]
pub struct TestPlan {
    options: PlanOptions,
    methods: IndexMap<Name, TestMethod, FxBuildHasher>,
}

impl TestPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PlanOptions) -> Self {
        Self {
            options,
            methods: IndexMap::default(),
        }
    }

    /// One parser test per parser rule of `rules`, in declaration order.
    ///
    /// Descriptors are built in parallel; the plan is filled sequentially
    /// afterwards so ordering does not depend on scheduling.
    pub fn for_parser_rules(rules: &RuleSet, options: PlanOptions) -> Result<Self> {
        let grammar_name = rules.grammar_name();
        let start_rules: Vec<&Name> = rules.parser_rules().collect();
        let methods = start_rules
            .par_iter()
            .map(|rule| -> Result<ParserTestMethod> {
                let name = method_name_for_rule(&options.method_prefix, rule)?;
                Ok(ParserTestMethod::from_names(
                    name,
                    grammar_name.clone(),
                    (*rule).clone(),
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut plan = Self::with_options(options);
        for method in methods {
            if let Err(err) = plan.push(method) {
                tracing::warn!("Cannot plan tests for grammar {}: {}", grammar_name, err);
                return Err(err);
            }
        }
        tracing::debug!(
            "Planned {} parser test method(s) for grammar {}",
            plan.len(),
            grammar_name
        );
        Ok(plan)
    }

    pub fn options(&self) -> &PlanOptions {
        &self.options
    }

    /// Add a descriptor.
    ///
    /// Returns `Ok(false)` when an identical descriptor is already planned and
    /// `dedup` is on. A different descriptor under a taken name is an error.
    pub fn push(&mut self, method: impl Into<TestMethod>) -> Result<bool> {
        let method = method.into();
        match self.methods.entry(method.name().clone()) {
            Entry::Vacant(slot) => {
                slot.insert(method);
                Ok(true)
            }
            Entry::Occupied(slot) if self.options.dedup && *slot.get() == method => {
                tracing::debug!("Test method {} already planned", slot.key());
                Ok(false)
            }
            Entry::Occupied(slot) => Err(InvalidDescriptor::DuplicateMethod {
                name: slot.key().to_string(),
            }),
        }
    }

    /// Add a parser descriptor after checking its start rule against `rules`
    /// (unless `check_rules` is off).
    pub fn push_parser<G>(&mut self, method: ParserTestMethod, rules: &G) -> Result<bool>
    where
        G: GrammarRules + ?Sized,
    {
        if self.options.check_rules {
            check_start_rule(&method, rules)?;
        }
        self.push(method)
    }

    pub fn get(&self, name: &str) -> Option<&TestMethod> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TestMethod> {
        self.methods.values()
    }

    /// Distinct kinds in the plan, first-seen order.
    pub fn kinds(&self) -> IndexSet<TestMethodKind> {
        self.methods.values().map(|method| method.kind()).collect()
    }

    /// Methods grouped by the template that renders them, first-seen order.
    pub fn by_template(&self) -> IndexMap<&'static str, Vec<&TestMethod>> {
        let mut groups: IndexMap<&'static str, Vec<&TestMethod>> = IndexMap::new();
        for method in self.methods.values() {
            groups.entry(method.template_name()).or_default().push(method);
        }
        groups
    }
}

impl<'a> IntoIterator for &'a TestPlan {
    type Item = &'a TestMethod;
    type IntoIter = indexmap::map::Values<'a, Name, TestMethod>;

    fn into_iter(self) -> Self::IntoIter {
        self.methods.values()
    }
}
