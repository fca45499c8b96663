//! Validation rules and the document driver
//!
//! Rules are process-lifetime factories; each document pass instantiates a
//! fresh visitor so no accumulator state survives between documents. The
//! driver dispatches enter/leave events for each executable operation in
//! document order.

use std::sync::Arc;

use crate::analysis::{AnalysisOptions, CostAnalysis, Violation};
use crate::ast::{Definition, Document, OperationDefinition};
use crate::observability::{Logger, Severity as LogSeverity};
use crate::schema::Schema;

use super::context::ValidationContext;

/// Per-document visitor keyed by operation enter/leave events
pub trait DocumentVisitor {
    /// Called when an executable operation is entered
    fn enter_operation(&mut self, ctx: &mut ValidationContext<'_>, operation: &OperationDefinition);

    /// Called when an executable operation is left
    fn leave_operation(&mut self, ctx: &mut ValidationContext<'_>, operation: &OperationDefinition);
}

/// A validation rule: a long-lived factory of per-document visitors
pub trait ValidationRule: Send + Sync {
    /// Instantiates the visitor for one document pass.
    ///
    /// The context is available so construction-time configuration errors
    /// can be reported into the document's diagnostics.
    fn instance(&self, ctx: &mut ValidationContext<'_>) -> Box<dyn DocumentVisitor>;
}

/// The cost-analysis validation rule
pub struct CostAnalysisRule {
    options: AnalysisOptions,
}

impl CostAnalysisRule {
    /// Creates the rule with the given analysis options
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }
}

impl ValidationRule for CostAnalysisRule {
    fn instance(&self, ctx: &mut ValidationContext<'_>) -> Box<dyn DocumentVisitor> {
        Box::new(CostAnalysis::new(ctx, self.options.clone()))
    }
}

impl DocumentVisitor for CostAnalysis {
    fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        operation: &OperationDefinition,
    ) {
        CostAnalysis::enter_operation(self, ctx, operation);
    }

    fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        operation: &OperationDefinition,
    ) {
        CostAnalysis::leave_operation(self, ctx, operation);
    }
}

/// Runs the given rules over one document and returns the diagnostics.
///
/// Each rule gets a fresh visitor; all visitors share one context and one
/// diagnostics sink. Reported violations are logged but never alter the
/// result.
pub fn visit_document(
    schema: &Schema,
    document: &Document,
    rules: &[Arc<dyn ValidationRule>],
) -> Vec<Violation> {
    let mut ctx = ValidationContext::new(schema, document);
    let mut visitors: Vec<Box<dyn DocumentVisitor>> =
        rules.iter().map(|rule| rule.instance(&mut ctx)).collect();

    for definition in &document.definitions {
        if let Definition::Operation(operation) = definition {
            for visitor in visitors.iter_mut() {
                visitor.enter_operation(&mut ctx, operation);
            }
            for visitor in visitors.iter_mut() {
                visitor.leave_operation(&mut ctx, operation);
            }
        }
    }

    let violations = ctx.into_diagnostics();
    for violation in &violations {
        Logger::log(
            LogSeverity::Warn,
            "COST_VIOLATION",
            &[
                ("code", violation.code().code()),
                ("message", violation.message()),
            ],
        );
    }
    violations
}
