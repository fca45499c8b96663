//! Analysis configuration
//!
//! Options are immutable per evaluation run: constructed once per server or
//! route configuration, then shared read-only by any number of concurrent
//! document evaluations.

use crate::policy::{ArgumentValues, ComplexityRange, CostMap};

/// Configuration for one cost-analysis pass
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Maximum total cost allowed per operation before a violation is
    /// reported
    pub maximum_cost: i64,

    /// Cost applied per field when the cost map is empty, when a declared
    /// complexity is out of range, and when a fragment reference cannot be
    /// resolved
    pub default_cost: i64,

    /// Resolved variable bindings for the document under analysis
    pub variables: ArgumentValues,

    /// Declarative pricing; empty switches the analyzer into flat
    /// default-cost mode
    pub cost_map: CostMap,

    /// Valid bounds for declared complexity values
    pub complexity_range: ComplexityRange,
}

impl AnalysisOptions {
    /// Creates options with the given budget and everything else defaulted
    pub fn new(maximum_cost: i64) -> Self {
        Self {
            maximum_cost,
            ..Self::default()
        }
    }

    /// Sets the default per-field cost
    pub fn with_default_cost(mut self, default_cost: i64) -> Self {
        self.default_cost = default_cost;
        self
    }

    /// Sets the cost map
    pub fn with_cost_map(mut self, cost_map: CostMap) -> Self {
        self.cost_map = cost_map;
        self
    }

    /// Sets the complexity range
    pub fn with_complexity_range(mut self, range: ComplexityRange) -> Self {
        self.complexity_range = range;
        self
    }

    /// Binds one variable value
    pub fn with_variable(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.variables.insert(name.into(), value);
        self
    }

    /// Replaces the variable bindings wholesale
    pub fn with_variables(mut self, variables: ArgumentValues) -> Self {
        self.variables = variables;
        self
    }
}
