use crate::domains::network::models::{ClusterListResponse, NetworkInfoResponse};
use crate::shared::services::AppState;
use axum::{extract::State, Json};

/// 활성 네트워크 정보 조회 핸들러
/// Get active network information
#[utoipa::path(
    get,
    path = "/api/v1/network",
    responses(
        (status = 200, description = "Active network information", body = NetworkInfoResponse)
    ),
    tag = "Network"
)]
pub async fn get_network_info(State(app_state): State<AppState>) -> Json<NetworkInfoResponse> {
    Json(app_state.network_state.network_service.network_info())
}

/// 지원 클러스터 목록 조회 핸들러
/// List supported clusters
#[utoipa::path(
    get,
    path = "/api/v1/network/clusters",
    responses(
        (status = 200, description = "Supported clusters", body = ClusterListResponse)
    ),
    tag = "Network"
)]
pub async fn list_clusters(State(app_state): State<AppState>) -> Json<ClusterListResponse> {
    Json(ClusterListResponse {
        clusters: app_state.network_state.network_service.clusters(),
    })
}
