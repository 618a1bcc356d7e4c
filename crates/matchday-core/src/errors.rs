//! Application error taxonomy.
//!
//! Every pipeline stage (authentication, authorization, validation,
//! controllers, services) returns [`AppError`]. The single [`IntoResponse`]
//! implementation below is the only place where errors are translated into
//! HTTP responses, so the envelope shape and status mapping live here.

use std::collections::BTreeMap;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::response::ApiResponse;

const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Category of an [`AppError`], which decides the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Client input is malformed (400).
    Validation,
    /// Credential missing or invalid (401).
    Authentication,
    /// Credential valid but role insufficient (403).
    Authorization,
    /// Referenced entity does not exist (404).
    NotFound,
    /// Anything else, e.g. the store is unavailable (500).
    Unknown,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::Authentication => StatusCode::UNAUTHORIZED,
            Self::Authorization => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    /// Name of the offending field as it appears on the wire
    pub field: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
    pub fields: Vec<FieldError>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
            fields: Vec::new(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, Error::msg(message.into()))
    }

    /// Builds a validation error from a list of field failures. The error
    /// message joins every field message in order.
    pub fn invalid_fields(fields: Vec<FieldError>) -> Self {
        let message = fields
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Self {
            kind: ErrorKind::Validation,
            error: Error::msg(message),
            fields,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authentication, Error::msg(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Authorization, Error::msg(message.into()))
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, Error::msg(message.into()))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unknown, err)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    /// Message safe to show to the client. Unknown errors never leak their
    /// underlying cause.
    pub fn client_message(&self) -> String {
        match self.kind {
            ErrorKind::Unknown => UNKNOWN_ERROR_MESSAGE.to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind {
            ErrorKind::Unknown => {
                tracing::error!(error = ?self.error, "Unhandled error while processing request");
            }
            kind => {
                tracing::debug!(kind = ?kind, error = %self.error, "Request rejected");
            }
        }

        let data = if self.fields.is_empty() {
            None
        } else {
            Some(json!({ "errors": self.fields }))
        };

        let body = Json(ApiResponse::error(self.client_message(), data));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

/// Flattens `validator` errors into field failures sorted by field name.
///
/// Errors without a message fall back to `"<field> is invalid"`.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let sorted: BTreeMap<_, _> = errors.field_errors().into_iter().collect();

    sorted
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field.to_string(), message)
            })
        })
        .collect()
}
