use crate::shared::storage::SwapRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// 스왑 트랜잭션 레코드 응답 모델
// Swap transaction record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = TransactionRecordResponse)]
pub struct TransactionRecordResponse {
    /// 레코드 ID
    pub id: Uuid,

    /// 입력 토큰 민트
    #[schema(example = "So11111111111111111111111111111111111111112")]
    pub input_mint: String,

    /// 출력 토큰 민트
    #[schema(example = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v")]
    pub output_mint: String,

    /// 스왑 수량 (SOL 단위)
    #[schema(example = 1.0)]
    pub amount: f64,

    /// 예상 출력 금액
    #[schema(example = "500000")]
    pub out_amount: String,

    /// 지갑 공개 키
    #[schema(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub user_public_key: String,

    /// 생성 시각
    pub created_at: DateTime<Utc>,
}

impl From<SwapRecord> for TransactionRecordResponse {
    fn from(record: SwapRecord) -> Self {
        Self {
            id: record.id,
            input_mint: record.input_mint,
            output_mint: record.output_mint,
            amount: record.amount,
            out_amount: record.out_amount,
            user_public_key: record.user_public_key,
            created_at: record.created_at,
        }
    }
}

// 레코드 목록 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = TransactionListResponse)]
pub struct TransactionListResponse {
    pub transactions: Vec<TransactionRecordResponse>,
}

// 레코드 목록 조회 파라미터
#[derive(Debug, Serialize, Deserialize, ToSchema, utoipa::IntoParams)]
#[schema(as = TransactionListQuery)]
pub struct TransactionListQuery {
    /// 지갑 공개 키 필터 (선택)
    /// Optional wallet filter
    #[param(example = "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")]
    pub user_public_key: Option<String>,
}

// 온체인 트랜잭션 상태 응답 모델
// On-chain transaction status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = TransactionStatusResponse)]
pub struct TransactionStatusResponse {
    /// 트랜잭션 서명
    pub signature: String,

    /// 상태: confirmed | failed | unknown
    #[schema(example = "confirmed")]
    pub status: String,

    /// 실패 시 에러 메시지
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
