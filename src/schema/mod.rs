//! Schema collaborator for cost analysis
//!
//! The cost analyzer never owns a type system; it queries one. This module
//! provides the read-only registry the analyzer needs plus argument-value
//! resolution against declared input types.
//!
//! # Design Principles
//!
//! - Read-only after construction: build with `with_*`, then share freely
//! - Unknown names resolve to "nothing", never to errors
//! - Coercion failures yield absent values, not zeros

mod arguments;
mod errors;
mod types;

pub use arguments::{argument_values, value_from_literal};
pub use errors::{SchemaError, SchemaResult};
pub use types::{
    ArgumentDef, FieldDef, Schema, TypeDef, TypeKind, TypeRef, BUILTIN_SCALARS,
};
