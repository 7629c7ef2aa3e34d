//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use eatery_domain::error::EateryError;
use eatery_domain::validation::FieldError;

/// JSON error body returned by API endpoints: `{"error": ...}`.
#[derive(Serialize)]
pub struct ErrorBody<T> {
    pub error: T,
}

impl ErrorBody<String> {
    /// Build a plain-message body.
    pub fn message(message: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: message.into(),
        })
    }
}

/// One entry of a 400 response, identifying the failing field by `path`.
#[derive(Debug, Serialize)]
pub struct FieldErrorBody {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub path: &'static str,
    pub msg: String,
    pub reason: &'static str,
    pub location: &'static str,
}

impl From<&FieldError> for FieldErrorBody {
    fn from(err: &FieldError) -> Self {
        Self {
            kind: "field",
            path: err.field.as_str(),
            msg: err.message(),
            reason: err.reason.as_str(),
            location: "body",
        }
    }
}

/// Maps [`EateryError`] to an HTTP response with appropriate status code.
///
/// Storage failures are logged and answered with a generic body so that no
/// internal detail reaches the client.
pub struct ApiError(EateryError);

impl From<EateryError> for ApiError {
    fn from(err: EateryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            EateryError::Validation(err) => {
                let errors: Vec<FieldErrorBody> =
                    err.errors.iter().map(FieldErrorBody::from).collect();
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: errors })).into_response()
            }
            EateryError::NotFound(err) => {
                (StatusCode::NOT_FOUND, ErrorBody::message(err.to_string())).into_response()
            }
            EateryError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::message("internal server error"),
                )
                    .into_response()
            }
        }
    }
}
