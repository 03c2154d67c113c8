// User domain routes
use crate::domains::user::handlers::user_handler;
use crate::shared::services::AppState;
use axum::{routing::get, Router};

/// Create user router
/// 사용자 라우터 생성
pub fn create_user_router() -> Router<AppState> {
    Router::new().route(
        "/me",
        get(user_handler::get_profile).put(user_handler::update_profile),
    )
}
