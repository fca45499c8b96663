//! Literal argument values as they appear in a parsed query document.
//!
//! These are document-side literals, not runtime values: a `Variable` is an
//! unresolved reference and numeric literals carry no schema coercion. The
//! schema collaborator turns them into runtime `serde_json::Value`s.

/// A literal value attached to a field argument or input-object field.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Reference to an operation variable, e.g. `$limit`
    Variable(String),
    /// Integer literal
    Int(i64),
    /// Floating-point literal
    Float(f64),
    /// String literal
    String(String),
    /// Boolean literal
    Boolean(bool),
    /// Explicit null literal
    Null,
    /// Enum value literal (bare name, not quoted)
    Enum(String),
    /// List literal
    List(Vec<Value>),
    /// Input-object literal
    Object(Vec<ObjectField>),
}

impl Value {
    /// Create a variable reference
    pub fn variable(name: impl Into<String>) -> Self {
        Value::Variable(name.into())
    }

    /// Create an integer literal
    pub fn int(value: i64) -> Self {
        Value::Int(value)
    }

    /// Create a float literal
    pub fn float(value: f64) -> Self {
        Value::Float(value)
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Value::String(value.into())
    }

    /// Create a boolean literal
    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    /// Create an enum value literal
    pub fn enum_value(name: impl Into<String>) -> Self {
        Value::Enum(name.into())
    }

    /// Create a list literal
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    /// Create an input-object literal from (name, value) pairs
    pub fn object<N: Into<String>>(fields: Vec<(N, Value)>) -> Self {
        Value::Object(
            fields
                .into_iter()
                .map(|(name, value)| ObjectField {
                    name: name.into(),
                    value,
                })
                .collect(),
        )
    }
}

/// One field of an input-object literal
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectField {
    /// Field name
    pub name: String,
    /// Field value
    pub value: Value,
}
