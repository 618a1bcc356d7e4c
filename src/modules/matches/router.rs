use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::role::{STAFF, protect};
use crate::state::AppState;

use super::controller::{create_match, delete_match, get_all_matches, get_match, update_match};

pub fn init_matches_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(get_all_matches))
        .route("/{id}", get(get_match));

    let staff = Router::new()
        .route("/", post(create_match))
        .route("/{id}", put(update_match).delete(delete_match));

    public.merge(protect(staff, state, STAFF))
}
