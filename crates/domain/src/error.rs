//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`EateryError`] via `From`.

use crate::validation::FieldError;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum EateryError {
    /// The submitted payload failed field validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence layer failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// One or more fields of a payload are invalid.
///
/// Holds every failing field in check order, never only the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Wrap a list of field errors.
    #[must_use]
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// No record of kind `entity` exists with the given id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
