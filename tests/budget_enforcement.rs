//! Budget Enforcement Tests
//!
//! The budget guard runs per operation, after the operation's full tree has
//! been walked:
//! - at most one budget violation per offending operation
//! - the report embeds the literal maximum and the literal actual total
//! - the accumulator spans the whole document, never other documents
//! - operations without a defined root type contribute nothing

use costguard::analysis::{analyze_document, AnalysisOptions, CostErrorCode};
use costguard::ast::{Document, Field, OperationDefinition};
use costguard::policy::{CostMap, CostRule, TypeCost};
use costguard::schema::{FieldDef, Schema, TypeDef};

fn schema() -> Schema {
    Schema::new()
        .with_type(TypeDef::object("Query").with_field("eight", FieldDef::int()))
        .with_type(TypeDef::object("Mutation").with_field("write", FieldDef::int()))
        .with_query_type("Query")
        .with_mutation_type("Mutation")
}

fn cost_map() -> CostMap {
    CostMap::new()
        .with_type(
            "Query",
            TypeCost::default().with_field("eight", CostRule::flat(8)),
        )
        .with_type(
            "Mutation",
            TypeCost::default().with_field("write", CostRule::flat(8)),
        )
}

fn eight_query(name: &str) -> OperationDefinition {
    OperationDefinition::query()
        .with_name(name)
        .with_selection(Field::new("eight"))
}

#[test]
fn test_under_budget_passes() {
    let document = Document::new().with_operation(eight_query("Ok"));
    let report = analyze_document(&schema(), &document, &AnalysisOptions::new(8).with_cost_map(cost_map()));
    assert!(report.is_admissible());
    assert_eq!(report.cost, 8);
}

#[test]
fn test_zero_budget_rejects_any_cost() {
    let document = Document::new().with_operation(eight_query("Any"));
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(0).with_cost_map(cost_map()));
    assert!(!report.is_admissible());
}

#[test]
fn test_violation_embeds_literal_values() {
    let document = Document::new().with_operation(eight_query("Big"));
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(1).with_cost_map(cost_map()));

    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert_eq!(violation.code(), CostErrorCode::CostLimitExceeded);
    assert_eq!(
        violation.message(),
        "The query exceeds the maximum cost of 1. Actual cost is 8"
    );
    assert_eq!(violation.operation(), Some("Big"));
}

#[test]
fn test_accumulator_spans_the_document() {
    // each operation alone fits the budget; together they exceed it on the
    // second operation's finalize
    let document = Document::new()
        .with_operation(eight_query("A"))
        .with_operation(eight_query("B"));
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(10).with_cost_map(cost_map()));

    assert_eq!(report.cost, 16);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].operation(), Some("B"));
    assert_eq!(
        report.violations[0].message(),
        "The query exceeds the maximum cost of 10. Actual cost is 16"
    );
}

#[test]
fn test_one_violation_per_offending_operation() {
    let document = Document::new()
        .with_operation(eight_query("A"))
        .with_operation(eight_query("B"));
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(5).with_cost_map(cost_map()));

    assert_eq!(report.violations.len(), 2);
    assert_eq!(report.violations[0].operation(), Some("A"));
    assert_eq!(
        report.violations[0].message(),
        "The query exceeds the maximum cost of 5. Actual cost is 8"
    );
    assert_eq!(report.violations[1].operation(), Some("B"));
    assert_eq!(
        report.violations[1].message(),
        "The query exceeds the maximum cost of 5. Actual cost is 16"
    );
}

#[test]
fn test_mutation_root_accumulates() {
    let document = Document::new().with_operation(
        OperationDefinition::mutation()
            .with_name("W")
            .with_selection(Field::new("write")),
    );
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(100).with_cost_map(cost_map()));
    assert_eq!(report.cost, 8);
}

#[test]
fn test_undefined_root_contributes_nothing() {
    // no subscription root is declared; the operation is walked but free
    let document = Document::new()
        .with_operation(
            OperationDefinition::subscription()
                .with_name("S")
                .with_selection(Field::new("eight")),
        )
        .with_operation(eight_query("Q"));
    let report =
        analyze_document(&schema(), &document, &AnalysisOptions::new(100).with_cost_map(cost_map()));
    assert_eq!(report.cost, 8);
    assert!(report.is_admissible());
}

#[test]
fn test_documents_do_not_share_accumulators() {
    let document = Document::new().with_operation(eight_query("Q"));
    let options = AnalysisOptions::new(10).with_cost_map(cost_map());

    // a second document starts from zero, not from the first one's total
    let first = analyze_document(&schema(), &document, &options);
    let second = analyze_document(&schema(), &document, &options);
    assert_eq!(first.cost, 8);
    assert_eq!(second.cost, 8);
    assert!(second.is_admissible());
}
