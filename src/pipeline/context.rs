//! Per-document validation context
//!
//! Owns the diagnostics sink for one document pass and exposes the
//! read-only lookups rules need: the schema and the document's named
//! fragments.

use std::collections::HashMap;

use crate::analysis::Violation;
use crate::ast::{Definition, Document, FragmentDefinition};
use crate::schema::Schema;

/// Shared state for one validation pass over one document
pub struct ValidationContext<'a> {
    schema: &'a Schema,
    fragments: HashMap<&'a str, &'a FragmentDefinition>,
    diagnostics: Vec<Violation>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context for the given schema and document.
    ///
    /// Named fragments are indexed up front; on a duplicate name the first
    /// definition wins.
    pub fn new(schema: &'a Schema, document: &'a Document) -> Self {
        let mut fragments = HashMap::new();
        for definition in &document.definitions {
            if let Definition::Fragment(fragment) = definition {
                fragments.entry(fragment.name.as_str()).or_insert(fragment);
            }
        }
        Self {
            schema,
            fragments,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the schema under validation
    pub fn schema(&self) -> &'a Schema {
        self.schema
    }

    /// Looks up a named fragment definition
    pub fn fragment(&self, name: &str) -> Option<&'a FragmentDefinition> {
        self.fragments.get(name).copied()
    }

    /// Appends a violation to the diagnostics sink
    pub fn report(&mut self, violation: Violation) {
        self.diagnostics.push(violation);
    }

    /// Returns the violations reported so far
    pub fn diagnostics(&self) -> &[Violation] {
        &self.diagnostics
    }

    /// Consumes the context, yielding the reported violations
    pub fn into_diagnostics(self) -> Vec<Violation> {
        self.diagnostics
    }
}
