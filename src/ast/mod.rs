//! Query document AST for cost analysis
//!
//! The analyzer consumes an already-parsed abstract tree of selections;
//! lexing and parsing belong to the embedding query engine. This module
//! models exactly the shape the analyzer needs: operations, selection sets,
//! fields with arguments, named and inline fragments, and literal values.

mod document;
mod value;

pub use document::{
    Argument, Definition, Document, Field, FragmentDefinition, FragmentSpread, InlineFragment,
    OperationDefinition, OperationKind, Selection, SelectionSet,
};
pub use value::{ObjectField, Value};
