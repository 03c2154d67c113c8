use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 활성 네트워크 정보 응답 모델
// Active network information
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = NetworkInfoResponse)]
pub struct NetworkInfoResponse {
    /// 클러스터 이름
    #[schema(example = "mainnet-beta")]
    pub cluster: String,

    /// RPC URL
    #[schema(example = "https://api.mainnet-beta.solana.com")]
    pub rpc_url: String,

    /// 네이티브 자산 민트 (wrapped SOL)
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub native_mint: String,

    /// 네이티브 자산 최소 단위 환산 (lamports per SOL)
    #[schema(example = 1_000_000_000u64)]
    pub lamports_per_sol: u64,
}

// 지원 클러스터 모델
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = ClusterInfo)]
pub struct ClusterInfo {
    /// 클러스터 이름
    #[schema(example = "devnet")]
    pub name: String,

    /// 기본 RPC URL
    #[schema(example = "https://api.devnet.solana.com")]
    pub rpc_url: String,
}

// 클러스터 목록 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ClusterListResponse)]
pub struct ClusterListResponse {
    pub clusters: Vec<ClusterInfo>,
}
