use axum::{Json, extract::State, http::StatusCode};
use matchday_core::{ApiResponse, AppError};
use matchday_models::{
    CreateTournamentDto, ListQuery, NewTournament, Tournament, TournamentChanges,
    TournamentIdParams, UpdateTournamentDto,
};
use tracing::instrument;

use crate::modules::tournaments::service::TournamentService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/api/v1/tournaments",
    params(ListQuery),
    responses(
        (status = 200, description = "tournaments successfully retrieved", body = ApiResponse<Vec<Tournament>>),
        (status = 400, description = "Invalid paging parameters")
    ),
    tag = "Tournaments"
)]
#[instrument(skip(state))]
pub async fn get_all_tournaments(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Tournament>>>, AppError> {
    let tournaments = TournamentService::get_all_tournaments(state.store.as_ref(), &query).await?;

    Ok(Json(ApiResponse::success(
        tournaments,
        "tournaments successfully retrieved",
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/tournaments/{id}",
    params(TournamentIdParams),
    responses(
        (status = 200, description = "tournament successfully retrieved", body = ApiResponse<Tournament>),
        (status = 404, description = "Tournament not found")
    ),
    tag = "Tournaments"
)]
#[instrument(skip(state))]
pub async fn get_tournament(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<TournamentIdParams>,
) -> Result<Json<ApiResponse<Tournament>>, AppError> {
    let tournament = TournamentService::get_tournament(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::success(
        tournament,
        "tournament successfully retrieved",
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/tournaments",
    request_body = CreateTournamentDto,
    responses(
        (status = 201, description = "tournament created successfully", body = ApiResponse<Tournament>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager")
    ),
    tag = "Tournaments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_tournament(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTournamentDto>,
) -> Result<(StatusCode, Json<ApiResponse<Tournament>>), AppError> {
    let input =
        NewTournament::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let tournament = TournamentService::create_tournament(state.store.as_ref(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            tournament,
            "tournament created successfully",
        )),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/tournaments/{id}",
    params(TournamentIdParams),
    request_body = UpdateTournamentDto,
    responses(
        (status = 200, description = "tournament updated successfully", body = ApiResponse<Tournament>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "Tournaments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_tournament(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<TournamentIdParams>,
    ValidatedJson(dto): ValidatedJson<UpdateTournamentDto>,
) -> Result<Json<ApiResponse<Tournament>>, AppError> {
    let changes =
        TournamentChanges::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let tournament =
        TournamentService::update_tournament(state.store.as_ref(), &params.id, changes).await?;

    Ok(Json(ApiResponse::success(
        tournament,
        "tournament updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tournaments/{id}",
    params(TournamentIdParams),
    responses(
        (status = 200, description = "Tournament successfully deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Tournament not found")
    ),
    tag = "Tournaments",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_tournament(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<TournamentIdParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    TournamentService::delete_tournament(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::message_only(
        "Tournament successfully deleted",
    )))
}
