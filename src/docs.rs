use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use matchday_auth::{Identity, Role};
use matchday_core::{FieldError, ResponseStatus};
use matchday_models::{
    CreateMatchDto, CreatePlayerDto, CreateTournamentDto, Match, MatchDetails, Player,
    PlayerDetails, SetRoleDto, Tournament, TournamentDetails, UpdateMatchDto, UpdatePlayerDto,
    UpdateTournamentDto, UserRoleDetails, UserRoleRecord,
};

use crate::modules::health::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::health::controller::health_check,
        crate::modules::players::controller::get_all_players,
        crate::modules::players::controller::get_player,
        crate::modules::players::controller::create_player,
        crate::modules::players::controller::update_player,
        crate::modules::players::controller::delete_player,
        crate::modules::matches::controller::get_all_matches,
        crate::modules::matches::controller::get_match,
        crate::modules::matches::controller::create_match,
        crate::modules::matches::controller::update_match,
        crate::modules::matches::controller::delete_match,
        crate::modules::tournaments::controller::get_all_tournaments,
        crate::modules::tournaments::controller::get_tournament,
        crate::modules::tournaments::controller::create_tournament,
        crate::modules::tournaments::controller::update_tournament,
        crate::modules::tournaments::controller::delete_tournament,
        crate::modules::users::controller::get_profile,
        crate::modules::users::controller::set_custom_claims,
        crate::modules::users::controller::get_user_role,
    ),
    components(
        schemas(
            Player,
            PlayerDetails,
            CreatePlayerDto,
            UpdatePlayerDto,
            Match,
            MatchDetails,
            CreateMatchDto,
            UpdateMatchDto,
            Tournament,
            TournamentDetails,
            CreateTournamentDto,
            UpdateTournamentDto,
            Identity,
            Role,
            SetRoleDto,
            UserRoleRecord,
            UserRoleDetails,
            FieldError,
            ResponseStatus,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Service liveness"),
        (name = "Players", description = "Player management endpoints"),
        (name = "Matches", description = "Match management endpoints"),
        (name = "Tournaments", description = "Tournament management endpoints"),
        (name = "Users", description = "Caller identity"),
        (name = "Admin", description = "Role assignment, admin only")
    ),
    info(
        title = "Matchday API",
        description = "REST API for players, matches and tournaments with role-based access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
