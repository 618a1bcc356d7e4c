use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::role::{STAFF, protect};
use crate::state::AppState;

use super::controller::{
    create_tournament, delete_tournament, get_all_tournaments, get_tournament, update_tournament,
};

pub fn init_tournaments_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(get_all_tournaments))
        .route("/{id}", get(get_tournament));

    let staff = Router::new()
        .route("/", post(create_tournament))
        .route("/{id}", put(update_tournament).delete(delete_tournament));

    public.merge(protect(staff, state, STAFF))
}
