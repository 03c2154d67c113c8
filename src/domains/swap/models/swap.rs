use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// 스왑 가격 조회 API 요청 파라미터
// Quote request parameters
// Note: amount는 네이티브 자산(SOL)의 "whole unit" 단위
//       lamports 변환은 서버에서 수행
#[derive(Debug, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[schema(as = QuoteRequest)]
pub struct QuoteRequest {
    /// Input token mint address
    /// 입력 토큰 주소
    #[param(example = "So11111111111111111111111111111111111111112")]
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: String,

    /// Output token mint address
    /// 출력 토큰 주소
    #[param(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    #[schema(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: String,

    /// Amount to swap, in whole units of the native asset (SOL)
    /// 스왑할 수량 (SOL 단위, lamports 아님)
    #[param(example = 1.0)]
    #[schema(example = 1.0)]
    pub amount: f64,
}

// Jupiter quote 응답 모델
// Note: Jupiter API는 camelCase로 응답하므로 #[serde(rename = "...")]로 매핑
// Note: 서버가 읽는 필드만 타입으로 고정하고, 나머지는 `extra`로 그대로 통과시킴
//       (swap POST의 quoteResponse가 원본과 구조적으로 동일해야 함)
// Unknown fields are preserved via the flattened map so the quote re-serializes
// exactly as Jupiter returned it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = QuoteResponse)]
pub struct QuoteResponse {
    #[serde(rename = "inputMint")]
    pub input_mint: String,
    #[serde(rename = "inAmount")]
    pub in_amount: String,
    #[serde(rename = "outputMint")]
    pub output_mint: String,
    #[serde(rename = "outAmount")]
    pub out_amount: String,
    #[serde(rename = "otherAmountThreshold")]
    pub other_amount_threshold: String,
    #[serde(rename = "swapMode")]
    pub swap_mode: String,
    #[serde(rename = "slippageBps")]
    pub slippage_bps: u32,
    #[serde(rename = "priceImpactPct", skip_serializing_if = "Option::is_none")]
    pub price_impact_pct: Option<String>,
    #[serde(rename = "routePlan")]
    pub route_plan: Vec<RoutePlan>,
    /// Jupiter가 추가로 보내는 필드들 (pass-through)
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = RoutePlan)]
pub struct RoutePlan {
    #[serde(rename = "swapInfo")]
    pub swap_info: SwapInfo,
    pub percent: i32,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(as = SwapInfo)]
pub struct SwapInfo {
    #[serde(rename = "ammKey")]
    pub amm_key: String,
    pub label: String,
    #[serde(rename = "inputMint")]
    pub input_mint: String,
    #[serde(rename = "outputMint")]
    pub output_mint: String,
    #[serde(rename = "inAmount")]
    pub in_amount: String,
    #[serde(rename = "outAmount")]
    pub out_amount: String,
    #[serde(rename = "feeAmount")]
    pub fee_amount: String,
    #[serde(rename = "feeMint")]
    pub fee_mint: String,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// 스왑 트랜잭션 생성 API 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SwapTransactionRequest)]
pub struct SwapTransactionRequest {
    /// Input token mint address
    /// 입력 토큰 주소
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: String,

    /// Output token mint address
    /// 출력 토큰 주소
    #[schema(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: String,

    /// Amount to swap, in whole units of the native asset (SOL)
    /// 스왑할 수량 (SOL 단위)
    #[schema(example = 1.0)]
    pub amount: f64,

    /// User public key (will sign the transaction)
    /// 사용자 공개 키 (트랜잭션 서명자)
    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub user_public_key: String,
}

// 스왑 트랜잭션 생성 API 응답 모델
// Note: swapObj는 Jupiter의 버전 관리되는 외부 스키마이므로 opaque JSON으로 유지
// The swap payload is owned by Jupiter's versioned API, so it stays opaque.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SwapTransactionResponse)]
pub struct SwapTransactionResponse {
    /// 생성된 스왑 레코드 ID
    /// Id of the recorded swap
    pub id: Uuid,

    /// Jupiter가 만든 (서명 전) 스왑 트랜잭션 페이로드
    /// Unsigned swap transaction payload as built by Jupiter
    #[serde(rename = "swapObj")]
    #[schema(value_type = Object)]
    pub swap_obj: serde_json::Value,

    /// Quote에서 읽은 예상 출력 금액
    /// Expected output amount taken from the quote
    #[serde(rename = "outAmount")]
    #[schema(example = "500000")]
    pub out_amount: String,
}
