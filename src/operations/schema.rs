//! Field descriptors and the validator shared by every operation.
//!
//! Validation turns an untyped JSON argument object into [`ValidatedArgs`]:
//! every field is type-checked, defaults are applied, and all violations are
//! collected before failing so the caller sees the full list at once.

use std::fmt;

use miette::Diagnostic;
use serde_json::{Map, Value};
use thiserror::Error;

pub type JsonObject = Map<String, Value>;

/// Semantic type of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Text,
    /// Non-negative whole number.
    Integer,
    Boolean,
    TextList,
    /// A string restricted to a fixed set of values.
    Choice(&'static [&'static str]),
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "a string"),
            FieldType::Integer => write!(f, "a non-negative integer"),
            FieldType::Boolean => write!(f, "a boolean"),
            FieldType::TextList => write!(f, "a list of strings"),
            FieldType::Choice(values) => write!(f, "one of: {}", values.join(", ")),
        }
    }
}

/// Where a validated parameter ends up in the outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Interpolated into the path template.
    Path,
    Query,
    /// Top level of the JSON body.
    Body,
    /// Nested under the body's `options` object.
    Options,
    /// Per-call API key; never sent as a parameter.
    Credential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub ty: FieldType,
    pub required: bool,
    pub placement: Placement,
    pub default: Option<u64>,
}

impl Field {
    pub const fn required(name: &'static str, ty: FieldType, placement: Placement) -> Self {
        Self {
            name,
            ty,
            required: true,
            placement,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, ty: FieldType, placement: Placement) -> Self {
        Self {
            name,
            ty,
            required: false,
            placement,
            default: None,
        }
    }

    /// Integer value used when the caller leaves the field out.
    pub const fn with_default(mut self, value: u64) -> Self {
        self.default = Some(value);
        self
    }
}

/// A type-checked parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Text(String),
    Integer(u64),
    Boolean(bool),
    TextList(Vec<String>),
}

impl ParamValue {
    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::Text(s) => Value::String(s.clone()),
            ParamValue::Integer(n) => Value::from(*n),
            ParamValue::Boolean(b) => Value::Bool(*b),
            ParamValue::TextList(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
        }
    }

    /// Rendering used for query strings and path segments.
    pub fn to_query(&self) -> String {
        match self {
            ParamValue::Text(s) => s.clone(),
            ParamValue::Integer(n) => n.to_string(),
            ParamValue::Boolean(b) => b.to_string(),
            ParamValue::TextList(items) => items.join(","),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Arguments that passed validation, in descriptor order.
#[derive(Clone, Default, PartialEq)]
pub struct ValidatedArgs {
    values: Vec<(&'static Field, ParamValue)>,
}

impl ValidatedArgs {
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values
            .iter()
            .find(|(field, _)| field.name == name)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static Field, &ParamValue)> + '_ {
        self.values.iter().map(|(field, value)| (*field, value))
    }

    /// Per-call API key, when one was supplied and is not blank.
    pub fn credential(&self) -> Option<&str> {
        self.iter()
            .filter(|(field, _)| field.placement == Placement::Credential)
            .find_map(|(_, value)| value.as_text())
            .filter(|key| !key.trim().is_empty())
    }
}

impl fmt::Debug for ValidatedArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (field, value) in self.iter() {
            if field.placement == Placement::Credential {
                map.entry(&field.name, &"[redacted]");
            } else {
                map.entry(&field.name, value);
            }
        }
        map.finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    Missing,
    Empty,
    WrongType(FieldType),
    NotAllowed(&'static [&'static str]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub problem: Problem,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            Problem::Missing => write!(f, "`{}` is required", self.field),
            Problem::Empty => write!(f, "`{}` must not be empty", self.field),
            Problem::WrongType(ty) => write!(f, "`{}` must be {}", self.field, ty),
            Problem::NotAllowed(values) => {
                write!(f, "`{}` must be one of: {}", self.field, values.join(", "))
            }
        }
    }
}

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("Invalid arguments for {operation}: {}", summarize(.violations))]
#[diagnostic(code(reviewweb::operations::invalid_arguments))]
pub struct ValidationError {
    pub operation: &'static str,
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate `args` against `fields`.
///
/// `null` is treated as absent. Keys that match no field are ignored.
pub fn validate(
    operation: &'static str,
    fields: &'static [Field],
    args: &JsonObject,
) -> Result<ValidatedArgs, ValidationError> {
    let mut values = Vec::with_capacity(fields.len());
    let mut violations = Vec::new();

    for field in fields {
        match args.get(field.name) {
            None | Some(Value::Null) => {
                if let Some(default) = field.default {
                    values.push((field, ParamValue::Integer(default)));
                } else if field.required {
                    violations.push(Violation {
                        field: field.name,
                        problem: Problem::Missing,
                    });
                }
            }
            Some(value) => match coerce(field, value) {
                Ok(param) => values.push((field, param)),
                Err(problem) => violations.push(Violation {
                    field: field.name,
                    problem,
                }),
            },
        }
    }

    if violations.is_empty() {
        Ok(ValidatedArgs { values })
    } else {
        Err(ValidationError {
            operation,
            violations,
        })
    }
}

fn coerce(field: &Field, value: &Value) -> Result<ParamValue, Problem> {
    let wrong_type = || Problem::WrongType(field.ty);

    match field.ty {
        FieldType::Text => {
            let text = value.as_str().ok_or_else(wrong_type)?;
            if field.required && text.trim().is_empty() {
                return Err(Problem::Empty);
            }
            Ok(ParamValue::Text(text.to_string()))
        }
        FieldType::Integer => whole_number(value)
            .map(ParamValue::Integer)
            .ok_or_else(wrong_type),
        FieldType::Boolean => value
            .as_bool()
            .map(ParamValue::Boolean)
            .ok_or_else(wrong_type),
        FieldType::TextList => {
            let items = value.as_array().ok_or_else(wrong_type)?;
            if field.required && items.is_empty() {
                return Err(Problem::Empty);
            }
            items
                .iter()
                .map(|item| match item.as_str() {
                    Some(s) if s.trim().is_empty() => Err(Problem::Empty),
                    Some(s) => Ok(s.to_string()),
                    None => Err(wrong_type()),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(ParamValue::TextList)
        }
        FieldType::Choice(allowed) => {
            let text = value.as_str().ok_or(Problem::NotAllowed(allowed))?;
            if allowed.contains(&text) {
                Ok(ParamValue::Text(text.to_string()))
            } else {
                Err(Problem::NotAllowed(allowed))
            }
        }
    }
}

// JSON clients sometimes send `5000.0` for an integer.
fn whole_number(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= u64::MAX as f64)
            .map(|n| n as u64)
    })
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;
