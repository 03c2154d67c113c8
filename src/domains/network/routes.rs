// Network domain routes
use crate::domains::network::handlers::network_handler;
use crate::shared::services::AppState;
use axum::{routing::get, Router};

/// Create network router
/// 네트워크 라우터 생성
pub fn create_network_router() -> Router<AppState> {
    Router::new()
        .route("/", get(network_handler::get_network_info))
        .route("/clusters", get(network_handler::list_clusters))
}
