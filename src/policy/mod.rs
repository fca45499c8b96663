//! Cost policy subsystem
//!
//! Declarative pricing consumed by the analyzer:
//!
//! - `CostMap`: (type, field) → `CostRule`, with return-type fallback
//! - `ComplexityRange`: valid bounds for declared complexity
//! - multiplier resolution: argument values → integer scaling factors
//!
//! Policy objects are configuration: built once, shared read-only by any
//! number of concurrent analysis runs.

mod cost;
mod multiplier;
mod range;

pub use cost::{ArgumentValues, CostMap, CostRule, MultiplierFn, TypeCost};
pub use multiplier::{multiplier_of, to_number};
pub use range::ComplexityRange;
