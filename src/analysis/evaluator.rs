//! Recursive cost evaluation
//!
//! One `CostAnalysis` instance exists per document evaluation. It walks each
//! operation's selection tree depth-first, pricing fields from the cost map,
//! propagating multiplier chains down through nested selections, and
//! reconciling type-conditional branches by worst case. The accumulated
//! total is checked against the budget when an operation is left.
//!
//! Traversal rules:
//!
//! - sibling branches never share a multiplier chain: the chain is cloned
//!   before it is extended
//! - alternative fragment branches on one selection set combine by maximum,
//!   not sum, since only one branch executes per response
//! - only strictly positive field contributions accumulate, so negative
//!   multiplier arguments cannot drain the total
//! - unresolvable names price at zero; traversal continues regardless

use crate::ast::{Field, OperationDefinition, Selection, SelectionSet};
use crate::pipeline::ValidationContext;
use crate::policy::multiplier_of;
use crate::schema::{argument_values, TypeDef};

use super::errors::Violation;
use super::options::AnalysisOptions;

/// Per-document cost evaluation state
pub struct CostAnalysis {
    options: AnalysisOptions,
    cost: i64,
    default_complexity: i64,
}

impl CostAnalysis {
    /// Creates the evaluation state for one document.
    ///
    /// An inverted complexity range is reported here, once, and evaluation
    /// proceeds in degraded mode.
    pub fn new(ctx: &mut ValidationContext<'_>, options: AnalysisOptions) -> Self {
        let range = options.complexity_range;
        if range.is_inverted() {
            ctx.report(Violation::invalid_complexity_range());
        }
        let default_complexity = if range.min != 0 { range.min } else { 1 };
        Self {
            options,
            cost: 0,
            default_complexity,
        }
    }

    /// Returns the cost accumulated so far
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Accumulates the cost of one operation's selection tree.
    ///
    /// Operations whose root type is not defined in the schema contribute
    /// nothing.
    pub fn enter_operation(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        operation: &OperationDefinition,
    ) {
        let Some(root) = ctx.schema().root_type(operation.kind) else {
            return;
        };
        let subtotal = self.selection_set_cost(ctx, &operation.selection_set, Some(root), &[]);
        self.cost = self.cost.saturating_add(subtotal);
    }

    /// Checks the accumulated total against the budget.
    ///
    /// The check runs after the full tree has been walked, so a single pass
    /// surfaces every range violation alongside at most one budget violation
    /// per operation.
    pub fn leave_operation(
        &mut self,
        ctx: &mut ValidationContext<'_>,
        operation: &OperationDefinition,
    ) {
        if self.cost > self.options.maximum_cost {
            ctx.report(
                Violation::cost_limit_exceeded(self.options.maximum_cost, self.cost)
                    .in_operation(operation.name.as_deref()),
            );
        }
    }

    fn selection_set_cost<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        set: &SelectionSet,
        type_ctx: Option<&'a TypeDef>,
        chain: &[i64],
    ) -> i64 {
        let schema = ctx.schema();
        let mut total: i64 = 0;
        let mut branch_costs: Vec<i64> = Vec::new();

        for selection in &set.items {
            let item_cost = match selection {
                Selection::Field(field) => self.field_cost(ctx, field, type_ctx, chain),
                Selection::FragmentSpread(spread) => {
                    let branch = match ctx.fragment(&spread.name) {
                        None => self.options.default_cost,
                        Some(fragment) => {
                            let condition = schema.type_def(&fragment.type_condition);
                            self.selection_set_cost(
                                ctx,
                                &fragment.selection_set,
                                condition,
                                chain,
                            )
                        }
                    };
                    branch_costs.push(branch);
                    0
                }
                Selection::InlineFragment(inline) => {
                    let condition = match &inline.type_condition {
                        Some(name) => schema.type_def(name),
                        None => type_ctx,
                    };
                    let branch =
                        self.selection_set_cost(ctx, &inline.selection_set, condition, chain);
                    branch_costs.push(branch);
                    0
                }
            };
            if item_cost > 0 {
                total = total.saturating_add(item_cost);
            }
        }

        total.saturating_add(branch_costs.into_iter().max().unwrap_or(0))
    }

    fn field_cost<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &Field,
        type_ctx: Option<&'a TypeDef>,
        chain: &[i64],
    ) -> i64 {
        let schema = ctx.schema();
        let Some(parent) = type_ctx else {
            return 0;
        };
        let Some(field_def) = parent.field(&field.name) else {
            return 0;
        };
        let return_type = field_def.type_ref.name();
        let child_type = schema.type_def(return_type);

        // with no cost map at all, every field prices flat at the default
        if self.options.cost_map.is_empty() {
            return self
                .options
                .default_cost
                .saturating_add(self.child_cost(ctx, field, child_type, chain));
        }

        let rule = self
            .options
            .cost_map
            .lookup(parent.name(), &field.name, return_type)
            .cloned();

        let Some(rule) = rule else {
            return self
                .default_complexity
                .saturating_add(self.child_cost(ctx, field, child_type, chain));
        };

        let range = self.options.complexity_range;
        if range.outside(rule.complexity) {
            ctx.report(Violation::complexity_out_of_range(range.min, range.max));
            return self
                .options
                .default_cost
                .saturating_add(self.child_cost(ctx, field, child_type, chain));
        }

        if !rule.use_multipliers {
            return rule
                .complexity
                .saturating_add(self.child_cost(ctx, field, child_type, chain));
        }

        let args = argument_values(
            schema,
            &field_def.args,
            &field.arguments,
            &self.options.variables,
        );
        let factor = multiplier_of(&rule, &args);

        // the chain is cloned before extension so siblings stay independent
        let extended;
        let effective: &[i64] = if factor != 0 {
            let mut cloned = chain.to_vec();
            cloned.push(factor);
            extended = cloned;
            &extended
        } else {
            chain
        };

        let own = effective
            .iter()
            .fold(rule.complexity, |acc, factor| acc.saturating_mul(*factor));
        own.saturating_add(self.child_cost(ctx, field, child_type, effective))
    }

    fn child_cost<'a>(
        &mut self,
        ctx: &mut ValidationContext<'a>,
        field: &Field,
        child_type: Option<&'a TypeDef>,
        chain: &[i64],
    ) -> i64 {
        match &field.selection_set {
            Some(set) => self.selection_set_cost(ctx, set, child_type, chain),
            None => 0,
        }
    }
}
