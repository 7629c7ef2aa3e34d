//! Validation layer — turns an untyped request payload into field errors.
//!
//! Checks run in a fixed order (`name`, `location`, `cuisine`) and every
//! failing field produces its own [`FieldError`]; the first failure never
//! hides the others.

use std::fmt;

use serde_json::Value;

/// A required text field of a restaurant payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Location,
    Cuisine,
}

impl Field {
    /// Every required field, in check order.
    pub const ALL: [Field; 3] = [Field::Name, Field::Location, Field::Cuisine];

    /// Key of the field in request payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Cuisine => "cuisine",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reason {
    /// Absent from the payload, or `null`.
    Missing,
    /// Present but falsy: `""`, `0` or `false`.
    Empty,
    /// Present but an array or object, which has no text form.
    NotText,
}

impl Reason {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Empty => "empty",
            Self::NotText => "not_text",
        }
    }
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub reason: Reason,
}

impl FieldError {
    #[must_use]
    pub fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Human-readable message, e.g. `Missing restaurant name`.
    #[must_use]
    pub fn message(&self) -> String {
        match self.reason {
            Reason::Missing => format!("Missing restaurant {}", self.field),
            Reason::Empty => format!("Restaurant {} must not be empty", self.field),
            Reason::NotText => format!("Restaurant {} must be text", self.field),
        }
    }
}

/// Validate a create payload: every required field must be a non-empty scalar.
///
/// Numbers and booleans are accepted and stored in their text form (see
/// [`scalar_text`]); whitespace counts as content. Returns an empty list when
/// the payload is valid. A payload that is not a JSON object fails every
/// field as [`Reason::Missing`].
#[must_use]
pub fn validate(payload: &Value) -> Vec<FieldError> {
    collect(payload, true)
}

/// Like [`validate`] but only checks presence and type, accepting empty values.
#[must_use]
pub fn validate_shape(payload: &Value) -> Vec<FieldError> {
    collect(payload, false)
}

fn collect(payload: &Value, reject_empty: bool) -> Vec<FieldError> {
    Field::ALL
        .into_iter()
        .filter_map(|field| {
            check_required(payload.get(field.as_str()), reject_empty)
                .map(|reason| FieldError::new(field, reason))
        })
        .collect()
}

fn check_required(value: Option<&Value>, reject_empty: bool) -> Option<Reason> {
    match value {
        None | Some(Value::Null) => Some(Reason::Missing),
        Some(Value::Array(_) | Value::Object(_)) => Some(Reason::NotText),
        Some(value) if reject_empty && is_falsy(value) => Some(Reason::Empty),
        Some(_) => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::String(text) => text.is_empty(),
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::Bool(flag) => !flag,
        Value::Null => true,
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text form of a scalar payload value: strings as-is, numbers and booleans
/// in their JSON spelling. `null`, arrays and objects have none.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read an optional field, treating `null` as absent.
///
/// # Errors
///
/// Returns [`Reason::NotText`] for an array or object, and [`Reason::Empty`]
/// for a falsy scalar when `reject_empty` is set.
pub(crate) fn optional_text(
    payload: &Value,
    field: Field,
    reject_empty: bool,
) -> Result<Option<String>, Reason> {
    match payload.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(_) | Value::Object(_)) => Err(Reason::NotText),
        Some(value) if reject_empty && is_falsy(value) => Err(Reason::Empty),
        Some(value) => Ok(scalar_text(value)),
    }
}
