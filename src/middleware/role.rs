//! Role-based authorization.
//!
//! Role checks read the [`AuthUser`] attached by
//! [`authenticate`](crate::middleware::auth::authenticate), so they only make
//! sense behind it. [`protect`] wires both layers in the right order and is
//! the only way routers should apply them.

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use matchday_auth::Role;
use matchday_core::AppError;

use crate::middleware::auth::{AuthUser, MISSING_HEADER, authenticate};
use crate::state::AppState;

/// Roles allowed to create, update and delete entities.
pub const STAFF: &[Role] = &[Role::Admin, Role::Manager];

/// Roles allowed to manage user role assignments.
pub const ADMIN: &[Role] = &[Role::Admin];

/// Any authenticated caller.
pub const ANY: &[Role] = &Role::ALL;

/// Rejects the request with 403 unless the caller holds one of
/// `allowed_roles`.
pub async fn require_roles(
    req: Request,
    next: Next,
    allowed_roles: &'static [Role],
) -> Result<Response, AppError> {
    let auth_user = req
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::unauthorized(MISSING_HEADER))?;

    check_any_role(auth_user, allowed_roles)?;

    Ok(next.run(req).await)
}

pub fn check_any_role(auth_user: &AuthUser, allowed_roles: &[Role]) -> Result<(), AppError> {
    if auth_user.has_any_role(allowed_roles) {
        return Ok(());
    }

    let required = allowed_roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    tracing::debug!(
        subject = %auth_user.subject(),
        role = %auth_user.role(),
        required = %required,
        "Role check failed"
    );

    Err(AppError::forbidden(format!(
        "Access denied. Required roles: {}",
        required
    )))
}

/// Puts every route of `router` behind authentication followed by a role
/// check against `allowed_roles`.
///
/// `route_layer`s run outermost-last, so `authenticate` is added after the
/// role check and therefore executes first.
pub fn protect(
    router: Router<AppState>,
    state: &AppState,
    allowed_roles: &'static [Role],
) -> Router<AppState> {
    router
        .route_layer(middleware::from_fn(move |req: Request, next: Next| {
            require_roles(req, next, allowed_roles)
        }))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchday_auth::Identity;

    fn user(role: Role) -> AuthUser {
        AuthUser(Identity {
            subject: "uid-1".into(),
            role,
            email: None,
        })
    }

    #[test]
    fn test_staff_allows_admin_and_manager() {
        assert!(check_any_role(&user(Role::Admin), STAFF).is_ok());
        assert!(check_any_role(&user(Role::Manager), STAFF).is_ok());
        assert!(check_any_role(&user(Role::User), STAFF).is_err());
    }

    #[test]
    fn test_admin_only() {
        assert!(check_any_role(&user(Role::Admin), ADMIN).is_ok());
        assert!(check_any_role(&user(Role::Manager), ADMIN).is_err());
    }

    #[test]
    fn test_denied_message_lists_roles() {
        let err = check_any_role(&user(Role::User), STAFF).unwrap_err();
        assert_eq!(err.status(), axum::http::StatusCode::FORBIDDEN);
        assert_eq!(
            err.client_message(),
            "Access denied. Required roles: admin, manager"
        );
    }

    #[test]
    fn test_any_accepts_every_role() {
        for role in Role::ALL {
            assert!(check_any_role(&user(role), ANY).is_ok());
        }
    }
}
