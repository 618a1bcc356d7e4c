//! Request extractors that deserialize a request part and run its
//! `validator` rules before the handler sees it.
//!
//! Every rejection is an [`AppError`] of kind `Validation`, so a bad request
//! never reaches the controller.

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Query, Request,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::request::Parts,
};
use matchday_core::{AppError, FieldError, field_errors};
use serde::de::DeserializeOwned;
use validator::Validate;

fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::invalid_fields(field_errors(&errors)))
}

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Pulls the offending field out of a serde error such as
/// `"...: jerseyNumber: invalid type: integer `10`, expected a string at line 1 column 20"`.
///
/// A body of the wrong shape at the top level carries no field path and
/// yields `None`.
fn type_error(body_text: &str) -> Option<FieldError> {
    let text = body_text.strip_prefix(DESERIALIZE_PREFIX).unwrap_or(body_text);
    let (path, rest) = text.split_once(": invalid type")?;
    let field = path.trim();
    if field.is_empty() || field.starts_with('[') || field.contains(' ') {
        return None;
    }

    let message = if rest.contains("expected a string") {
        format!("{} must be a string", field)
    } else {
        format!("{} has an invalid type", field)
    };
    Some(FieldError::new(field, message))
}

fn json_rejection(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::validation("Missing 'Content-Type: application/json' header")
        }
        JsonRejection::JsonDataError(err) => match type_error(&err.body_text()) {
            Some(field) => AppError::invalid_fields(vec![field]),
            None => AppError::validation("Invalid request body"),
        },
        JsonRejection::JsonSyntaxError(_) => AppError::validation("Malformed JSON in request body"),
        _ => AppError::validation("Invalid request body"),
    }
}

/// Query strings only carry numeric paging fields, so a failing field is
/// reported as a bad integer.
fn query_rejection(rejection: QueryRejection) -> AppError {
    let text = rejection.body_text();
    let field = text
        .rsplit_once(": ")
        .and_then(|(prefix, _)| prefix.rsplit(": ").next())
        .filter(|field| !field.contains(' '));

    match field {
        Some(field) => AppError::invalid_fields(vec![FieldError::new(
            field,
            format!("{} must be a non-negative integer", field),
        )]),
        None => AppError::validation("Invalid query string"),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(json_rejection)?;

        validate(&value)?;

        Ok(ValidatedJson(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!(error = %rejection.body_text(), "Path rejected");
                AppError::validation("Invalid path parameters")
            })?;

        validate(&value)?;

        Ok(ValidatedPath(value))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_rejection)?;

        validate(&value)?;

        Ok(ValidatedQuery(value))
    }
}
