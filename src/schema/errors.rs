//! Schema structure errors

use thiserror::Error;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema structure errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Root type '{0}' is not defined")]
    UnknownRootType(String),

    #[error("Root type '{0}' must be an object type")]
    RootNotObject(String),

    #[error("Union '{union}' references undefined member '{member}'")]
    UnknownUnionMember { union: String, member: String },
}
