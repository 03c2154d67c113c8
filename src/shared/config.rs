// 애플리케이션 설정
// Application configuration
//
// 원래 모듈 상수였던 값들 (Jupiter endpoint, 슬리피지 등)을
// 생성자 주입용 설정으로 관리
// Values that used to be module constants (Jupiter endpoint, slippage, ...)
// are carried here and injected at construction time.

/// 전역 슬리피지 (basis points)
/// Global slippage tolerance in basis points.
/// 10_000 bps = 100%, 즉 "슬리피지 제한 없음"
pub const GLOBAL_SLIPPAGE_BPS: u32 = 10_000;

/// 애플리케이션 설정 (환경 변수에서 읽음)
/// Application configuration (read from environment variables)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 서버 바인드 주소
    /// Server bind address
    pub bind_addr: String,

    /// CORS 허용 오리진
    /// Allowed CORS origin
    pub cors_origin: String,

    /// Jupiter API base URL
    pub jupiter_base_url: String,

    /// 스왑 슬리피지 (basis points)
    /// Swap slippage in basis points
    pub slippage_bps: u32,

    /// Solana RPC URL (트랜잭션 상태 조회용)
    /// Solana RPC URL (for transaction status lookups)
    pub rpc_url: String,

    /// 활성 클러스터 이름
    /// Active cluster name
    pub cluster: String,

    /// JWT 서명 키
    /// JWT signing secret
    pub jwt_secret: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 읽기 (없으면 기본값)
    /// Read configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            cors_origin: std::env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3003".to_string()),
            jupiter_base_url: std::env::var("JUPITER_BASE_URL")
                .unwrap_or_else(|_| "https://quote-api.jup.ag/v6".to_string()),
            slippage_bps: GLOBAL_SLIPPAGE_BPS,
            rpc_url: std::env::var("SOLANA_RPC_URL")
                .unwrap_or_else(|_| "https://api.mainnet-beta.solana.com".to_string()),
            cluster: std::env::var("SOLANA_CLUSTER")
                .unwrap_or_else(|_| "mainnet-beta".to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
        }
    }
}
