// Transaction domain routes
use crate::domains::transaction::handlers::transaction_handler;
use crate::shared::services::AppState;
use axum::{routing::get, Router};

/// Create transaction router
/// 트랜잭션 라우터 생성
pub fn create_transaction_router() -> Router<AppState> {
    Router::new()
        .route("/", get(transaction_handler::list_transactions))
        .route("/status/:signature", get(transaction_handler::get_transaction_status))
        .route("/:id", get(transaction_handler::get_transaction))
}
