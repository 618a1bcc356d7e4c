use axum::{Json, extract::State};
use matchday_auth::Identity;
use matchday_core::{ApiResponse, AppError};
use matchday_models::{SetRole, SetRoleDto, UserIdParams, UserRoleRecord};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};

#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Identity of the caller", body = ApiResponse<Identity>),
        (status = 401, description = "Missing or invalid bearer token")
    ),
    tag = "Users",
    security(("bearer_auth" = []))
)]
#[instrument(skip(auth_user), fields(uid = %auth_user.subject()))]
pub async fn get_profile(auth_user: AuthUser) -> Json<ApiResponse<Identity>> {
    Json(ApiResponse::success(
        auth_user.0,
        "profile successfully retrieved",
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/admin/set-custom-claims",
    request_body = SetRoleDto,
    responses(
        (status = 200, description = "Role assigned", body = ApiResponse<UserRoleRecord>),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, auth_user), fields(admin = %auth_user.subject()))]
pub async fn set_custom_claims(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<SetRoleDto>,
) -> Result<Json<ApiResponse<UserRoleRecord>>, AppError> {
    let input = SetRole::try_from(dto).map_err(|field| AppError::invalid_fields(vec![field]))?;
    let record = UserService::set_role(state.store.as_ref(), input).await?;

    Ok(Json(ApiResponse::success(
        record,
        "role assigned successfully",
    )))
}

#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    params(UserIdParams),
    responses(
        (status = 200, description = "Stored role assignment", body = ApiResponse<UserRoleRecord>),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Caller is not an admin"),
        (status = 404, description = "No role recorded for this user")
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_user_role(
    State(state): State<AppState>,
    ValidatedPath(params): ValidatedPath<UserIdParams>,
) -> Result<Json<ApiResponse<UserRoleRecord>>, AppError> {
    let record = UserService::get_role(state.store.as_ref(), &params.id).await?;

    Ok(Json(ApiResponse::success(
        record,
        "user role successfully retrieved",
    )))
}
