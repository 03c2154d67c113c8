// LST domain routes
use crate::domains::lst::handlers::lst_handler;
use crate::shared::services::AppState;
use axum::{routing::get, Router};

/// Create LST router
/// LST 라우터 생성
pub fn create_lst_router() -> Router<AppState> {
    Router::new()
        .route("/", get(lst_handler::list_lst_tokens))
        .route("/:mint", get(lst_handler::get_lst_token))
}
