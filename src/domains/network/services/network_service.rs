use crate::domains::network::models::{ClusterInfo, NetworkInfoResponse};
use crate::shared::config::AppConfig;
use solana_sdk::native_token::LAMPORTS_PER_SOL;

/// Wrapped SOL 민트 주소 (네이티브 자산)
pub const NATIVE_MINT: &str = "So11111111111111111111111111111111111111112";

// 네트워크 정보 서비스
// NetworkService: reports the active cluster and supported clusters
#[derive(Clone)]
pub struct NetworkService {
    config: AppConfig,
}

impl NetworkService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// 활성 네트워크 정보
    pub fn network_info(&self) -> NetworkInfoResponse {
        NetworkInfoResponse {
            cluster: self.config.cluster.clone(),
            rpc_url: self.config.rpc_url.clone(),
            native_mint: NATIVE_MINT.to_string(),
            lamports_per_sol: LAMPORTS_PER_SOL,
        }
    }

    /// 지원 클러스터 목록
    pub fn clusters(&self) -> Vec<ClusterInfo> {
        fn cluster(name: &str, rpc_url: &str) -> ClusterInfo {
            ClusterInfo {
                name: name.to_string(),
                rpc_url: rpc_url.to_string(),
            }
        }

        vec![
            cluster("mainnet-beta", "https://api.mainnet-beta.solana.com"),
            cluster("devnet", "https://api.devnet.solana.com"),
            cluster("testnet", "https://api.testnet.solana.com"),
        ]
    }
}
