//! Cost analysis subsystem
//!
//! Computes the cost of a query document before execution and reports
//! violations against the configured budget and complexity bounds.
//!
//! # Design Principles
//!
//! - Static: no execution, the selection tree alone determines cost
//! - Conservative: alternative type branches price at their worst case
//! - Total: one pass surfaces every violation, nothing aborts traversal
//! - Isolated: a fresh accumulator per document, nothing shared across runs

mod errors;
mod evaluator;
mod options;

pub use errors::{CostErrorCode, Severity, Violation};
pub use evaluator::CostAnalysis;
pub use options::AnalysisOptions;

use crate::ast::Document;
use crate::pipeline::ValidationContext;
use crate::schema::Schema;

/// Result of analyzing one document
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    /// Total accumulated cost across the document's operations
    pub cost: i64,
    /// Violations reported during the pass
    pub violations: Vec<Violation>,
}

impl AnalysisReport {
    /// Returns true when the document passed without violations
    pub fn is_admissible(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Analyzes a document against the given schema and options.
///
/// Convenience entry point for embedders that do not run a full validation
/// pipeline: one fresh evaluation, returning the accumulated cost and every
/// reported violation.
pub fn analyze_document(
    schema: &Schema,
    document: &Document,
    options: &AnalysisOptions,
) -> AnalysisReport {
    let mut ctx = ValidationContext::new(schema, document);
    let mut analysis = CostAnalysis::new(&mut ctx, options.clone());
    for operation in document.operations() {
        analysis.enter_operation(&mut ctx, operation);
        analysis.leave_operation(&mut ctx, operation);
    }
    AnalysisReport {
        cost: analysis.cost(),
        violations: ctx.into_diagnostics(),
    }
}
