use axum::{
    Router,
    routing::{get, post, put},
};

use crate::middleware::role::{STAFF, protect};
use crate::state::AppState;

use super::controller::{create_player, delete_player, get_all_players, get_player, update_player};

/// Reads are public; writes require an admin or manager.
pub fn init_players_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/", get(get_all_players))
        .route("/{id}", get(get_player));

    let staff = Router::new()
        .route("/", post(create_player))
        .route("/{id}", put(update_player).delete(delete_player));

    public.merge(protect(staff, state, STAFF))
}
