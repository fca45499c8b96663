//! Schema type definitions queried by the cost analyzer
//!
//! The analyzer treats the schema as a read-only collaborator:
//! - root type lookup by operation kind
//! - field-definition lookup by name on a type
//! - declared type names (policy-store keys)
//! - argument declarations for value coercion
//!
//! Built-in scalars are pre-seeded so argument coercion resolves them
//! without host setup.

use std::collections::HashMap;

use crate::ast::OperationKind;

use super::errors::{SchemaError, SchemaResult};

/// Scalar types every schema starts with
pub const BUILTIN_SCALARS: &[&str] = &["Int", "Float", "String", "Boolean", "ID"];

/// A possibly-wrapped reference to a named type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// Plain named type
    Named(String),
    /// Non-null wrapper
    NonNull(Box<TypeRef>),
    /// List wrapper
    List(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a plain named reference
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Wraps a reference in non-null
    pub fn non_null(inner: TypeRef) -> Self {
        TypeRef::NonNull(Box::new(inner))
    }

    /// Wraps a reference in a list
    pub fn list(inner: TypeRef) -> Self {
        TypeRef::List(Box::new(inner))
    }

    /// Returns the innermost named type
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Named(name) => name,
            TypeRef::NonNull(inner) | TypeRef::List(inner) => inner.name(),
        }
    }
}

/// A declared argument (also used for input-object fields)
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDef {
    /// Argument name
    pub name: String,
    /// Declared input type
    pub type_ref: TypeRef,
    /// Default applied when the argument is absent or resolves to null
    pub default_value: Option<serde_json::Value>,
}

impl ArgumentDef {
    /// Creates an argument declaration without a default
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            default_value: None,
        }
    }

    /// Creates an Int-typed argument declaration
    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, TypeRef::named("Int"))
    }

    /// Sets the default value
    pub fn with_default(mut self, default: serde_json::Value) -> Self {
        self.default_value = Some(default);
        self
    }
}

/// A field declared on an object or interface type
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Declared return type
    pub type_ref: TypeRef,
    /// Declared arguments
    pub args: Vec<ArgumentDef>,
}

impl FieldDef {
    /// Creates a field returning the given type
    pub fn new(type_ref: TypeRef) -> Self {
        Self {
            type_ref,
            args: Vec::new(),
        }
    }

    /// Creates an Int-returning field
    pub fn int() -> Self {
        Self::new(TypeRef::named("Int"))
    }

    /// Creates a String-returning field
    pub fn string() -> Self {
        Self::new(TypeRef::named("String"))
    }

    /// Creates a field returning the named type
    pub fn object(type_name: impl Into<String>) -> Self {
        Self::new(TypeRef::named(type_name))
    }

    /// Appends an argument declaration
    pub fn with_argument(mut self, arg: ArgumentDef) -> Self {
        self.args.push(arg);
        self
    }
}

/// The shape of a declared type
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Leaf scalar
    Scalar,
    /// Object type with fields
    Object {
        /// Field definitions keyed by name
        fields: HashMap<String, FieldDef>,
    },
    /// Interface type with fields
    Interface {
        /// Field definitions keyed by name
        fields: HashMap<String, FieldDef>,
    },
    /// Union of object types; carries no fields of its own
    Union {
        /// Member type names
        members: Vec<String>,
    },
    /// Enum with declared values
    Enum {
        /// Allowed value names
        values: Vec<String>,
    },
    /// Input object usable as an argument type
    InputObject {
        /// Input field declarations
        fields: Vec<ArgumentDef>,
    },
}

/// A named type declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDef {
    name: String,
    kind: TypeKind,
}

impl TypeDef {
    /// Creates a scalar type
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Scalar,
        }
    }

    /// Creates an object type with no fields
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Object {
                fields: HashMap::new(),
            },
        }
    }

    /// Creates an interface type with no fields
    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Interface {
                fields: HashMap::new(),
            },
        }
    }

    /// Creates a union over the named member types
    pub fn union(name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Union { members },
        }
    }

    /// Creates an enum with the given value names
    pub fn enum_type(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::Enum { values },
        }
    }

    /// Creates an input object with no fields
    pub fn input_object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: TypeKind::InputObject { fields: Vec::new() },
        }
    }

    /// Adds a field to an object or interface type.
    ///
    /// No-op for kinds without output fields.
    pub fn with_field(mut self, name: impl Into<String>, field: FieldDef) -> Self {
        match &mut self.kind {
            TypeKind::Object { fields } | TypeKind::Interface { fields } => {
                fields.insert(name.into(), field);
            }
            _ => {}
        }
        self
    }

    /// Adds an input field to an input-object type.
    ///
    /// No-op for other kinds.
    pub fn with_input_field(mut self, field: ArgumentDef) -> Self {
        if let TypeKind::InputObject { fields } = &mut self.kind {
            fields.push(field);
        }
        self
    }

    /// Returns the declared type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type's kind
    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Looks up a declared output field by name
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        match &self.kind {
            TypeKind::Object { fields } | TypeKind::Interface { fields } => fields.get(name),
            _ => None,
        }
    }

    /// Returns true for object types
    pub fn is_object(&self) -> bool {
        matches!(self.kind, TypeKind::Object { .. })
    }
}

/// A read-only type registry with optional operation roots
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    types: HashMap<String, TypeDef>,
    query: Option<String>,
    mutation: Option<String>,
    subscription: Option<String>,
}

impl Schema {
    /// Creates a schema pre-seeded with the built-in scalars
    pub fn new() -> Self {
        let mut types = HashMap::new();
        for name in BUILTIN_SCALARS {
            types.insert(name.to_string(), TypeDef::scalar(*name));
        }
        Self {
            types,
            query: None,
            mutation: None,
            subscription: None,
        }
    }

    /// Registers a type, replacing any previous declaration of the same name
    pub fn with_type(mut self, type_def: TypeDef) -> Self {
        self.types.insert(type_def.name.clone(), type_def);
        self
    }

    /// Names the query root type
    pub fn with_query_type(mut self, name: impl Into<String>) -> Self {
        self.query = Some(name.into());
        self
    }

    /// Names the mutation root type
    pub fn with_mutation_type(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    /// Names the subscription root type
    pub fn with_subscription_type(mut self, name: impl Into<String>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    /// Looks up a type declaration by name
    pub fn type_def(&self, name: &str) -> Option<&TypeDef> {
        self.types.get(name)
    }

    /// Returns the query root type when declared and defined
    pub fn query_type(&self) -> Option<&TypeDef> {
        self.query.as_deref().and_then(|name| self.type_def(name))
    }

    /// Returns the mutation root type when declared and defined
    pub fn mutation_type(&self) -> Option<&TypeDef> {
        self.mutation
            .as_deref()
            .and_then(|name| self.type_def(name))
    }

    /// Returns the subscription root type when declared and defined
    pub fn subscription_type(&self) -> Option<&TypeDef> {
        self.subscription
            .as_deref()
            .and_then(|name| self.type_def(name))
    }

    /// Resolves the root type for an operation kind
    pub fn root_type(&self, kind: OperationKind) -> Option<&TypeDef> {
        match kind {
            OperationKind::Query => self.query_type(),
            OperationKind::Mutation => self.mutation_type(),
            OperationKind::Subscription => self.subscription_type(),
        }
    }

    /// Validates the schema structure itself.
    ///
    /// Declared roots must resolve to object types and union members must be
    /// defined. Field return types are left to the analyzer, which treats
    /// unknown types as empty.
    pub fn validate_structure(&self) -> SchemaResult<()> {
        for root in [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .flatten()
        {
            match self.type_def(root) {
                None => return Err(SchemaError::UnknownRootType(root.clone())),
                Some(def) if !def.is_object() => {
                    return Err(SchemaError::RootNotObject(root.clone()))
                }
                Some(_) => {}
            }
        }
        for type_def in self.types.values() {
            if let TypeKind::Union { members } = &type_def.kind {
                for member in members {
                    if self.type_def(member).is_none() {
                        return Err(SchemaError::UnknownUnionMember {
                            union: type_def.name.clone(),
                            member: member.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema::new()
            .with_type(
                TypeDef::object("Query")
                    .with_field("first", FieldDef::object("First"))
                    .with_field("count", FieldDef::int()),
            )
            .with_type(TypeDef::object("First").with_field("name", FieldDef::string()))
            .with_query_type("Query")
    }

    #[test]
    fn test_builtin_scalars_seeded() {
        let schema = Schema::new();
        for name in BUILTIN_SCALARS {
            assert!(schema.type_def(name).is_some(), "missing scalar {}", name);
        }
    }

    #[test]
    fn test_root_type_lookup() {
        let schema = sample_schema();
        assert_eq!(schema.query_type().map(TypeDef::name), Some("Query"));
        assert!(schema.mutation_type().is_none());
        assert_eq!(
            schema.root_type(OperationKind::Query).map(TypeDef::name),
            Some("Query")
        );
        assert!(schema.root_type(OperationKind::Subscription).is_none());
    }

    #[test]
    fn test_field_lookup() {
        let schema = sample_schema();
        let query = schema.query_type().unwrap();
        assert!(query.field("first").is_some());
        assert!(query.field("missing").is_none());
    }

    #[test]
    fn test_union_has_no_fields() {
        let union = TypeDef::union("FirstOrSecond", vec!["First".into(), "Second".into()]);
        assert!(union.field("anything").is_none());
    }

    #[test]
    fn test_type_ref_innermost_name() {
        let wrapped = TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Item"))));
        assert_eq!(wrapped.name(), "Item");
        assert_eq!(TypeRef::named("Int").name(), "Int");
    }

    #[test]
    fn test_validate_structure_ok() {
        assert!(sample_schema().validate_structure().is_ok());
    }

    #[test]
    fn test_validate_unknown_root() {
        let schema = Schema::new().with_query_type("Query");
        assert_eq!(
            schema.validate_structure(),
            Err(SchemaError::UnknownRootType("Query".into()))
        );
    }

    #[test]
    fn test_validate_scalar_root_rejected() {
        let schema = Schema::new().with_query_type("Int");
        assert_eq!(
            schema.validate_structure(),
            Err(SchemaError::RootNotObject("Int".into()))
        );
    }

    #[test]
    fn test_validate_union_member_missing() {
        let schema = sample_schema()
            .with_type(TypeDef::union("Broken", vec!["First".into(), "Ghost".into()]));
        assert_eq!(
            schema.validate_structure(),
            Err(SchemaError::UnknownUnionMember {
                union: "Broken".into(),
                member: "Ghost".into(),
            })
        );
    }
}
