//! Declarative cost rules for types and fields
//!
//! A `CostMap` is built once per server or route configuration and read by
//! every analysis run. The declarative portion deserializes from JSON with
//! camelCase keys; multiplier callbacks are code-only configuration and
//! never part of the serialized form.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

/// Resolved runtime argument values, keyed by argument name
pub type ArgumentValues = HashMap<String, serde_json::Value>;

/// Custom multiplier computation over the resolved argument values.
///
/// When present on a rule it fully overrides name-based extraction.
pub type MultiplierFn = Arc<dyn Fn(&ArgumentValues) -> i64 + Send + Sync>;

/// Pricing for one field or one type
#[derive(Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostRule {
    /// Whether multiplier scaling applies; `multipliers` and
    /// `multiplier_fn` are consulted only when true
    pub use_multipliers: bool,

    /// Flat cost unit, or the per-unit cost scaled by the multiplier chain
    pub complexity: i64,

    /// Names of arguments whose values contribute multiplier factors
    pub multipliers: Vec<String>,

    /// Custom multiplier computation; wins over `multipliers` when set
    #[serde(skip)]
    pub multiplier_fn: Option<MultiplierFn>,
}

impl CostRule {
    /// Creates a flat-priced rule
    pub fn flat(complexity: i64) -> Self {
        Self {
            complexity,
            ..Self::default()
        }
    }

    /// Creates a multiplier-scaled rule over the named arguments
    pub fn scaled(complexity: i64, multipliers: &[&str]) -> Self {
        Self {
            use_multipliers: true,
            complexity,
            multipliers: multipliers.iter().map(|s| s.to_string()).collect(),
            multiplier_fn: None,
        }
    }

    /// Sets a custom multiplier function and enables multiplier scaling
    pub fn with_multiplier_fn(
        mut self,
        f: impl Fn(&ArgumentValues) -> i64 + Send + Sync + 'static,
    ) -> Self {
        self.use_multipliers = true;
        self.multiplier_fn = Some(Arc::new(f));
        self
    }
}

impl fmt::Debug for CostRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CostRule")
            .field("use_multipliers", &self.use_multipliers)
            .field("complexity", &self.complexity)
            .field("multipliers", &self.multipliers)
            .field("multiplier_fn", &self.multiplier_fn.as_ref().map(|_| "fn"))
            .finish()
    }
}

/// Pricing for a type: an optional cost for the type itself plus per-field
/// overrides
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TypeCost {
    /// Cost of the type itself, used when a field has no own entry
    pub type_cost: Option<CostRule>,

    /// Per-field costs, keyed by field name
    pub field_costs: HashMap<String, CostRule>,
}

impl TypeCost {
    /// Creates an entry pricing the type as a whole
    pub fn of_type(rule: CostRule) -> Self {
        Self {
            type_cost: Some(rule),
            field_costs: HashMap::new(),
        }
    }

    /// Adds a per-field cost
    pub fn with_field(mut self, name: impl Into<String>, rule: CostRule) -> Self {
        self.field_costs.insert(name.into(), rule);
        self
    }
}

/// Declarative pricing for a whole schema, keyed by type name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CostMap {
    entries: HashMap<String, TypeCost>,
}

impl CostMap {
    /// Creates an empty cost map
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds pricing for a type
    pub fn with_type(mut self, name: impl Into<String>, cost: TypeCost) -> Self {
        self.entries.insert(name.into(), cost);
        self
    }

    /// Returns true when no pricing is declared at all.
    ///
    /// An empty map switches the analyzer into flat default-cost mode.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves the rule for a field selection.
    ///
    /// The parent type's per-field entry wins; otherwise the field's declared
    /// return type prices itself via its `type_cost`. `None` means no policy
    /// is declared, which callers must keep distinct from a rule with zero
    /// complexity.
    pub fn lookup(
        &self,
        parent_type: &str,
        field_name: &str,
        field_type: &str,
    ) -> Option<&CostRule> {
        if let Some(type_cost) = self.entries.get(parent_type) {
            if let Some(rule) = type_cost.field_costs.get(field_name) {
                return Some(rule);
            }
        }
        self.entries
            .get(field_type)
            .and_then(|type_cost| type_cost.type_cost.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> CostMap {
        CostMap::new()
            .with_type(
                "Query",
                TypeCost::default().with_field("first", CostRule::scaled(2, &["limit"])),
            )
            .with_type("TypeCost", TypeCost::of_type(CostRule::flat(3)))
    }

    #[test]
    fn test_field_entry_wins() {
        let map = sample_map();
        let rule = map.lookup("Query", "first", "First").expect("rule");
        assert_eq!(rule.complexity, 2);
        assert!(rule.use_multipliers);
    }

    #[test]
    fn test_return_type_fallback() {
        let map = sample_map();
        let rule = map.lookup("Query", "byType", "TypeCost").expect("rule");
        assert_eq!(rule.complexity, 3);
        assert!(!rule.use_multipliers);
    }

    #[test]
    fn test_field_overrides_return_type() {
        let map = sample_map().with_type(
            "Query",
            TypeCost::default().with_field("byType", CostRule::flat(2)),
        );
        let rule = map.lookup("Query", "byType", "TypeCost").expect("rule");
        assert_eq!(rule.complexity, 2);
    }

    #[test]
    fn test_unmapped_field_has_no_rule() {
        let map = sample_map();
        assert!(map.lookup("Query", "other", "Int").is_none());
        assert!(map.lookup("Ghost", "first", "Int").is_none());
    }

    #[test]
    fn test_empty_map() {
        assert!(CostMap::new().is_empty());
        assert!(!sample_map().is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let map: CostMap = serde_json::from_str(
            r#"{
                "Query": {
                    "fieldCosts": {
                        "first": {
                            "useMultipliers": true,
                            "complexity": 2,
                            "multipliers": ["limit"]
                        }
                    }
                },
                "TypeCost": {
                    "typeCost": {"complexity": 3}
                }
            }"#,
        )
        .expect("valid cost map json");

        let rule = map.lookup("Query", "first", "First").expect("rule");
        assert!(rule.use_multipliers);
        assert_eq!(rule.complexity, 2);
        assert_eq!(rule.multipliers, vec!["limit".to_string()]);
        assert!(rule.multiplier_fn.is_none());

        let by_type = map.lookup("X", "y", "TypeCost").expect("rule");
        assert_eq!(by_type.complexity, 3);
    }

    #[test]
    fn test_multiplier_fn_builder() {
        let rule = CostRule::flat(4).with_multiplier_fn(|_| 9);
        assert!(rule.use_multipliers);
        assert!(rule.multiplier_fn.is_some());
    }
}
