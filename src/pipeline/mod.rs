//! Host validation pipeline glue
//!
//! Exposes cost analysis as a traversal rule keyed by operation enter/leave
//! events, plus the one-shot registration hosts call during their own setup.
//!
//! # Design Principles
//!
//! - Rules are factories; visitors live for exactly one document pass
//! - Diagnostics are a reporting side channel, decoupled from control flow
//! - Registration is idempotent at process scope, evaluation is not gated
//!   on it

mod context;
mod registry;
mod rule;

pub use context::ValidationContext;
pub use registry::{install, specified_rules};
pub use rule::{visit_document, CostAnalysisRule, DocumentVisitor, ValidationRule};
