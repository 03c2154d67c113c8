use crate::domains::lst::models::{LstListResponse, LstToken};
use crate::shared::services::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::json;

/// LST 목록 조회 핸들러
/// List supported liquid staking tokens
#[utoipa::path(
    get,
    path = "/api/v1/lst",
    responses(
        (status = 200, description = "Supported LSTs", body = LstListResponse)
    ),
    tag = "Lst"
)]
pub async fn list_lst_tokens(State(app_state): State<AppState>) -> Json<LstListResponse> {
    Json(LstListResponse {
        tokens: app_state.lst_state.lst_service.list_tokens(),
    })
}

/// 민트 주소로 LST 조회 핸들러
/// Get a single LST by mint address
#[utoipa::path(
    get,
    path = "/api/v1/lst/{mint}",
    params(
        ("mint" = String, Path, description = "Token mint address")
    ),
    responses(
        (status = 200, description = "LST found", body = LstToken),
        (status = 404, description = "Unknown mint")
    ),
    tag = "Lst"
)]
pub async fn get_lst_token(
    State(app_state): State<AppState>,
    Path(mint): Path<String>,
) -> Result<Json<LstToken>, (StatusCode, Json<serde_json::Value>)> {
    app_state
        .lst_state
        .lst_service
        .get_by_mint(&mint)
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("Unknown LST mint: {}", mint) })),
            )
        })
}
