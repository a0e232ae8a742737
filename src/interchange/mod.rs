//! Plan interchange: JSON and YAML.
//!
//! A plan is stored as the ordered list of its descriptors, each tagged with
//! its `kind`:
//!
//! ```json
//! [
//!   { "kind": "parser", "name": "testExpr", "grammarName": "Expr", "startRule": "expr" }
//! ]
//! ```
//!
//! Loading runs every descriptor through its constructor and the plan's
//! duplicate check, so a file cannot smuggle in an invalid descriptor.

mod error;

pub use error::InterchangeError;

use crate::descriptor::{TestMethod, TestMethodFields};
use crate::plan::{PlanOptions, TestPlan};

impl TestPlan {
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        let methods: Vec<&TestMethod> = self.iter().collect();
        Ok(serde_json::to_string_pretty(&methods)?)
    }

    pub fn from_json(json: &str, options: PlanOptions) -> Result<Self, InterchangeError> {
        let methods: Vec<TestMethodFields> = serde_json::from_str(json)?;
        Self::from_fields(methods, options)
    }

    pub fn to_yaml(&self) -> Result<String, InterchangeError> {
        let methods: Vec<&TestMethod> = self.iter().collect();
        Ok(serde_yaml::to_string(&methods)?)
    }

    pub fn from_yaml(yaml: &str, options: PlanOptions) -> Result<Self, InterchangeError> {
        let methods: Vec<TestMethodFields> = serde_yaml::from_str(yaml)?;
        Self::from_fields(methods, options)
    }

    fn from_fields(
        methods: Vec<TestMethodFields>,
        options: PlanOptions,
    ) -> Result<Self, InterchangeError> {
        let mut plan = Self::with_options(options);
        for fields in methods {
            plan.push(fields.build()?)?;
        }
        tracing::debug!("Loaded {} test method(s)", plan.len());
        Ok(plan)
    }
}
