use axum::{Json, extract::State, http::StatusCode};
use matchday_core::{ApiResponse, AppError};
use matchday_models::{
    CreateMatchDto, ListQuery, Match, MatchChanges, MatchIdParams, NewMatch, UpdateMatchDto,
};
use tracing::instrument;

use crate::modules::matches::service::MatchService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath, ValidatedQuery};

#[utoipa::path(
    get,
    path = "/api/v1/matches",
    params(ListQuery),
    responses(
        (status = 200, description = "matches successfully retrieved", body = ApiResponse<Vec<Match>>),
        (status = 400, description = "Invalid paging parameters")
    ),
    tag = "Matches"
)]
#[instrument(skip(state))]
pub async fn get_all_matches(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<ApiResponse<Vec<Match>>>, AppError> {
    let matches = MatchService::get_all_matches(state.store.as_ref(), &query).await?;

    Ok(Json(ApiResponse::success(
        matches,
        "matches successfully retrieved",
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/matches/{id}",
    params(MatchIdParams),
    responses(
        (status = 200, description = "match successfully retrieved", body = ApiResponse<Match>),
        (status = 404, description = "Match not found")
    ),
    tag = "Matches"
)]
#[instrument(skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<MatchIdParams>,
) -> Result<Json<ApiResponse<Match>>, AppError> {
    let fixture = MatchService::get_match(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::success(
        fixture,
        "match successfully retrieved",
    )))
}

#[utoipa::path(
    post,
    path = "/api/v1/matches",
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "match created successfully", body = ApiResponse<Match>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager")
    ),
    tag = "Matches",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_match(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateMatchDto>,
) -> Result<(StatusCode, Json<ApiResponse<Match>>), AppError> {
    let input = NewMatch::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let fixture = MatchService::create_match(state.store.as_ref(), input).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(fixture, "match created successfully")),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/matches/{id}",
    params(MatchIdParams),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "match updated successfully", body = ApiResponse<Match>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Match not found")
    ),
    tag = "Matches",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_match(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<MatchIdParams>,
    ValidatedJson(dto): ValidatedJson<UpdateMatchDto>,
) -> Result<Json<ApiResponse<Match>>, AppError> {
    let changes =
        MatchChanges::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let fixture = MatchService::update_match(state.store.as_ref(), &params.id, changes).await?;

    Ok(Json(ApiResponse::success(
        fixture,
        "match updated successfully",
    )))
}

#[utoipa::path(
    delete,
    path = "/api/v1/matches/{id}",
    params(MatchIdParams),
    responses(
        (status = 200, description = "Match successfully deleted"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin or manager"),
        (status = 404, description = "Match not found")
    ),
    tag = "Matches",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_match(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<MatchIdParams>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    MatchService::delete_match(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::message_only("Match successfully deleted")))
}
