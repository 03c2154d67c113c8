use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 지원하는 리퀴드 스테이킹 토큰 (LST) 모델
// Supported liquid staking token (LST)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = LstToken)]
pub struct LstToken {
    /// 토큰 민트 주소
    /// Token mint address
    #[schema(example = "J1toso1uCk3RLmjorhTtrVwY9HJ7X8V9yYac6Y7kGCPn")]
    pub mint: String,

    /// 심볼
    #[schema(example = "JitoSOL")]
    pub symbol: String,

    /// 이름
    #[schema(example = "Jito Staked SOL")]
    pub name: String,

    /// 소수점 자릿수
    #[schema(example = 9)]
    pub decimals: u8,
}

// LST 목록 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LstListResponse)]
pub struct LstListResponse {
    pub tokens: Vec<LstToken>,
}
