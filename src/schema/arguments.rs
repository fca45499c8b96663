//! Argument value resolution
//!
//! Turns document-side argument literals into runtime values for cost
//! analysis: variable substitution, list and input-object coercion with
//! declared defaults, and scalar/enum literal coercion. Nullish results are
//! treated as an absent argument, not as a zero value.

use std::collections::HashMap;

use serde_json::Value as RuntimeValue;

use crate::ast::{Argument, Value};

use super::types::{ArgumentDef, Schema, TypeKind, TypeRef};

/// Resolves the runtime value for each declared argument.
///
/// Arguments whose value resolves to null after defaulting are omitted from
/// the result, so `map.get(name)` distinguishes "absent" from any concrete
/// value.
pub fn argument_values(
    schema: &Schema,
    arg_defs: &[ArgumentDef],
    arg_nodes: &[Argument],
    variables: &HashMap<String, RuntimeValue>,
) -> HashMap<String, RuntimeValue> {
    let supplied: HashMap<&str, &Value> = arg_nodes
        .iter()
        .map(|arg| (arg.name.as_str(), &arg.value))
        .collect();

    let mut resolved = HashMap::new();
    for def in arg_defs {
        let mut value = match supplied.get(def.name.as_str()) {
            Some(literal) => value_from_literal(schema, literal, &def.type_ref, variables),
            None => RuntimeValue::Null,
        };
        if value.is_null() {
            if let Some(default) = &def.default_value {
                value = default.clone();
            }
        }
        if !value.is_null() {
            resolved.insert(def.name.clone(), value);
        }
    }
    resolved
}

/// Coerces one document literal against its declared input type.
///
/// Unresolvable shapes coerce to null; earlier validation passes own the
/// error reporting for those.
pub fn value_from_literal(
    schema: &Schema,
    literal: &Value,
    type_ref: &TypeRef,
    variables: &HashMap<String, RuntimeValue>,
) -> RuntimeValue {
    if let Value::Variable(name) = literal {
        return variables.get(name).cloned().unwrap_or(RuntimeValue::Null);
    }
    match type_ref {
        TypeRef::NonNull(inner) => value_from_literal(schema, literal, inner, variables),
        TypeRef::List(inner) => match literal {
            Value::List(items) => RuntimeValue::Array(
                items
                    .iter()
                    .map(|item| value_from_literal(schema, item, inner, variables))
                    .collect(),
            ),
            // single values coerce to a one-element list
            other => RuntimeValue::Array(vec![value_from_literal(schema, other, inner, variables)]),
        },
        TypeRef::Named(name) => named_from_literal(schema, literal, name, variables),
    }
}

fn named_from_literal(
    schema: &Schema,
    literal: &Value,
    type_name: &str,
    variables: &HashMap<String, RuntimeValue>,
) -> RuntimeValue {
    match schema.type_def(type_name).map(|def| def.kind()) {
        Some(TypeKind::InputObject { fields }) => {
            input_object_from_literal(schema, literal, fields, variables)
        }
        Some(TypeKind::Enum { values }) => match literal {
            Value::Enum(name) | Value::String(name) if values.contains(name) => {
                RuntimeValue::String(name.clone())
            }
            _ => RuntimeValue::Null,
        },
        Some(TypeKind::Scalar) | None => scalar_from_literal(type_name, literal),
        // output types are not valid argument types
        Some(_) => RuntimeValue::Null,
    }
}

fn input_object_from_literal(
    schema: &Schema,
    literal: &Value,
    fields: &[ArgumentDef],
    variables: &HashMap<String, RuntimeValue>,
) -> RuntimeValue {
    let Value::Object(supplied) = literal else {
        return RuntimeValue::Null;
    };
    let by_name: HashMap<&str, &Value> = supplied
        .iter()
        .map(|field| (field.name.as_str(), &field.value))
        .collect();

    let mut object = serde_json::Map::new();
    for field in fields {
        let mut value = match by_name.get(field.name.as_str()) {
            Some(literal) => value_from_literal(schema, literal, &field.type_ref, variables),
            None => RuntimeValue::Null,
        };
        if value.is_null() {
            if let Some(default) = &field.default_value {
                value = default.clone();
            }
        }
        if !value.is_null() {
            object.insert(field.name.clone(), value);
        }
    }
    RuntimeValue::Object(object)
}

fn scalar_from_literal(type_name: &str, literal: &Value) -> RuntimeValue {
    match type_name {
        "Int" => match literal {
            Value::Int(i) => RuntimeValue::from(*i),
            _ => RuntimeValue::Null,
        },
        "Float" => match literal {
            Value::Int(i) => RuntimeValue::from(*i as f64),
            Value::Float(f) => serde_json::Number::from_f64(*f)
                .map(RuntimeValue::Number)
                .unwrap_or(RuntimeValue::Null),
            _ => RuntimeValue::Null,
        },
        "String" => match literal {
            Value::String(s) => RuntimeValue::String(s.clone()),
            _ => RuntimeValue::Null,
        },
        "Boolean" => match literal {
            Value::Boolean(b) => RuntimeValue::Bool(*b),
            _ => RuntimeValue::Null,
        },
        "ID" => match literal {
            Value::String(s) => RuntimeValue::String(s.clone()),
            Value::Int(i) => RuntimeValue::String(i.to_string()),
            _ => RuntimeValue::Null,
        },
        // custom scalars pass their literal through unchanged
        _ => literal_to_runtime(literal),
    }
}

fn literal_to_runtime(literal: &Value) -> RuntimeValue {
    match literal {
        Value::Variable(_) | Value::Null => RuntimeValue::Null,
        Value::Int(i) => RuntimeValue::from(*i),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(RuntimeValue::Number)
            .unwrap_or(RuntimeValue::Null),
        Value::String(s) => RuntimeValue::String(s.clone()),
        Value::Boolean(b) => RuntimeValue::Bool(*b),
        Value::Enum(name) => RuntimeValue::String(name.clone()),
        Value::List(items) => RuntimeValue::Array(items.iter().map(literal_to_runtime).collect()),
        Value::Object(fields) => RuntimeValue::Object(
            fields
                .iter()
                .map(|field| (field.name.clone(), literal_to_runtime(&field.value)))
                .collect(),
        ),
    }
}
