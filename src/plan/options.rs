//! Plan options

/// How a [`TestPlan`](super::TestPlan) admits descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct PlanOptions {
    /// Cross-check parser start rules against the grammar's rule catalogue
    pub check_rules: bool,
    /// Prefix of method names derived from rule names
    pub method_prefix: String,
    /// Collapse identical descriptors instead of rejecting them as duplicates
    pub dedup: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            check_rules: true,
            method_prefix: "test".to_string(),
            dedup: true,
        }
    }
}

impl PlanOptions {
    pub fn with_check_rules(mut self, check_rules: bool) -> Self {
        self.check_rules = check_rules;
        self
    }

    pub fn with_method_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.method_prefix = prefix.into();
        self
    }

    pub fn with_dedup(mut self, dedup: bool) -> Self {
        self.dedup = dedup;
        self
    }
}
