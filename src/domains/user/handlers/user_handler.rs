use crate::domains::auth::models::UserResponse;
use crate::domains::user::models::UpdateProfileRequest;
use crate::shared::errors::AuthError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// 내 프로필 조회 핸들러
/// Get own profile (requires Bearer token)
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile retrieved", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_profile(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .user_state
        .user_service
        .get_profile(authenticated_user.user_id)
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}

/// 내 프로필 수정 핸들러
/// Update own profile (requires Bearer token)
#[utoipa::path(
    put,
    path = "/api/v1/users/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = UserResponse),
        (status = 401, description = "Missing or invalid token"),
        (status = 404, description = "User not found")
    ),
    security(("BearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_profile(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<UserResponse>, (StatusCode, Json<serde_json::Value>)> {
    let user = app_state
        .user_state
        .user_service
        .update_profile(authenticated_user.user_id, request.username.as_deref())
        .map_err(|e: AuthError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(user.into()))
}
