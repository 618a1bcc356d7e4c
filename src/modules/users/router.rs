use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::role::{ADMIN, ANY, protect};
use crate::state::AppState;

use super::controller::{get_profile, get_user_role, set_custom_claims};

/// Routes under `/users`, open to any authenticated caller.
pub fn init_users_router(state: &AppState) -> Router<AppState> {
    protect(Router::new().route("/me", get(get_profile)), state, ANY)
}

/// Routes under `/admin`, restricted to admins.
pub fn init_admin_router(state: &AppState) -> Router<AppState> {
    protect(
        Router::new()
            .route("/set-custom-claims", post(set_custom_claims))
            .route("/users/{id}", get(get_user_role)),
        state,
        ADMIN,
    )
}
