use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use matchday_auth::{Identity, Role};
use matchday_core::AppError;

use crate::state::AppState;

pub const MISSING_HEADER: &str = "Missing authorization header";
pub const INVALID_FORMAT: &str = "Invalid authorization header format";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Identity of the caller, attached to request extensions by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Identity);

impl AuthUser {
    pub fn subject(&self) -> &str {
        &self.0.subject
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.0.role)
    }
}

/// Reads `Authorization: Bearer <token>` and returns the token.
pub fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    let auth_header = parts
        .headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::unauthorized(MISSING_HEADER))?
        .to_str()
        .map_err(|_| AppError::unauthorized(INVALID_FORMAT))?;

    match auth_header.strip_prefix("Bearer ").map(str::trim) {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AppError::unauthorized(INVALID_FORMAT)),
    }
}

/// Verifies the bearer credential and attaches [`AuthUser`] to the request.
///
/// Every verification failure is reported with the same message so clients
/// cannot tell an expired token from a forged one.
pub async fn authenticate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let identity = {
        let token = bearer_token(&parts)?;
        state.identity.verify(token).await.map_err(|err| {
            tracing::debug!(error = %err, "Bearer token rejected");
            AppError::unauthorized(INVALID_TOKEN)
        })?
    };

    parts.extensions.insert(AuthUser(identity));

    Ok(next.run(Request::from_parts(parts, body)).await)
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized(MISSING_HEADER))
    }
}
