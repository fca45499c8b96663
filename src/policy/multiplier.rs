//! Folding runtime argument values into multiplier factors
//!
//! Values of heterogeneous runtime type collapse into integer magnitudes by
//! sum-type matching, one conversion rule per variant. A value that fails
//! conversion, or converts to zero, contributes nothing; absence of signal
//! is never an error here.

use serde_json::Value as RuntimeValue;

use super::cost::{ArgumentValues, CostRule};

/// Resolves the multiplier factor for one field selection.
///
/// A custom multiplier function wins outright and its result is returned
/// unchanged, zero or negative included; the evaluator decides what a
/// non-positive factor means. Without one, the named arguments convert
/// individually and their magnitudes sum.
pub fn multiplier_of(rule: &CostRule, args: &ArgumentValues) -> i64 {
    if let Some(custom) = &rule.multiplier_fn {
        return custom(args);
    }
    rule.multipliers
        .iter()
        .filter_map(|name| args.get(name))
        .filter_map(to_number)
        .fold(0i64, i64::saturating_add)
}

/// Converts one runtime value into a multiplier magnitude.
///
/// - integers contribute their value, unless zero
/// - floats contribute their value truncated toward zero, unless that is zero
/// - strings parse base-10, unless unparsable or zero
/// - arrays contribute their element count, unless empty
/// - everything else contributes nothing
pub fn to_number(value: &RuntimeValue) -> Option<i64> {
    match value {
        RuntimeValue::Number(number) => {
            let magnitude = if let Some(int) = number.as_i64() {
                int
            } else if let Some(unsigned) = number.as_u64() {
                i64::try_from(unsigned).unwrap_or(i64::MAX)
            } else {
                // `as` saturates at the i64 bounds and maps NaN to 0
                number.as_f64()? as i64
            };
            (magnitude != 0).then_some(magnitude)
        }
        RuntimeValue::String(text) => text.parse::<i64>().ok().filter(|parsed| *parsed != 0),
        RuntimeValue::Array(items) => {
            let count = items.len() as i64;
            (count > 0).then_some(count)
        }
        _ => None,
    }
}
