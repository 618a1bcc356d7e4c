use axum::{Json, extract::State, http::StatusCode};
use matchday_core::{ApiResponse, AppError};
use matchday_models::{
    CreatePlayerDto, ListQuery, NewPlayer, Player, PlayerChanges, PlayerIdParams, UpdatePlayerDto,
};
use tracing::instrument;

use crate::modules::players::service::PlayerService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/api/v1/players",
    params(ListQuery),
    responses(
        (status = 200, description = "players successfully retrieved", body = ApiResponse<Vec<Player>>),
        (status = 400, description = "Invalid paging parameters")
    ),
    tag = "Players"
)]
#[instrument(skip(state))]
pub async fn get_all_players(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Player>>>, AppError> {
    let players = PlayerService::get_all_players(state.store.as_ref(), &query).await?;

    Ok(Json(ApiResponse::success(
        players,
        "players successfully retrieved",
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/players/{id}",
    params(PlayerIdParams),
    responses(
        (status = 200, description = "player successfully retrieved", body = ApiResponse<Player>),
        (status = 404, description = "Player not found")
    ),
    tag = "Players"
)]
#[instrument(skip(state))]
pub async fn get_player(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<PlayerIdParams>,
) -> Result<Json<ApiResponse<Player>>, AppError> {
    let player = PlayerService::get_player(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::success(
        player,
        "player successfully retrieved",
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/players",
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "player created successfully", body = ApiResponse<Player>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager")
    ),
    tag = "Players",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreatePlayerDto>,
) -> Result<(StatusCode, Json<ApiResponse<Player>>), AppError> {
    let input = NewPlayer::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let player = PlayerService::create_player(state.store.as_ref(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(player, "player created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/players/{id}",
    params(PlayerIdParams),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "player updated successfully", body = ApiResponse<Player>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Player not found")
    ),
    tag = "Players",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_player(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<PlayerIdParams>,
    ValidatedJson(dto): ValidatedJson<UpdatePlayerDto>,
) -> Result<Json<ApiResponse<Player>>, AppError> {
    let player =
        PlayerService::update_player(state.store.as_ref(), &params.id, PlayerChanges::from(dto))
            .await?;

    Ok(Json(ApiResponse::success(
        player,
        "player updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/players/{id}",
    params(PlayerIdParams),
    responses(
        (status = 200, description = "Player successfully deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Player not found")
    ),
    tag = "Players",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<PlayerIdParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    PlayerService::delete_player(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::message_only("Player successfully deleted")))
}
