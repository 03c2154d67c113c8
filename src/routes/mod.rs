// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 /api/v1 아래에 조합
// Routes module: mounts all domain routers under the /api/v1 prefix

use crate::shared::services::AppState;
use axum::Router;

// 각 도메인의 routes import
use crate::domains::auth::routes::create_auth_router;
use crate::domains::lst::routes::create_lst_router;
use crate::domains::network::routes::create_network_router;
use crate::domains::swap::routes::create_swap_router;
use crate::domains::transaction::routes::create_transaction_router;
use crate::domains::user::routes::create_user_router;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터를 /api/v1 프리픽스로 조합)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_router())
}

/// /api/v1 아래에 마운트되는 6개 라우트 그룹
/// The six route groups mounted under /api/v1
fn api_v1_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", create_auth_router())
        .nest("/users", create_user_router())
        .nest("/lst", create_lst_router())
        .nest("/swap", create_swap_router())
        .nest("/network", create_network_router())
        .nest("/transactions", create_transaction_router())
}
