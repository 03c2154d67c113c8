use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;
use uuid::Uuid;

/// 트랜잭션 조회 관련 에러
/// Transaction lookup errors
#[derive(Error, Debug)]
pub enum TransactionError {
    /// 레코드를 찾을 수 없음
    /// Record not found
    #[error("Transaction not found: id={id}")]
    NotFound { id: Uuid },

    /// 잘못된 트랜잭션 서명
    /// Malformed transaction signature
    #[error("Invalid transaction signature: {signature}")]
    InvalidSignature { signature: String },

    /// Solana RPC 호출 실패
    /// Solana RPC call failed
    #[error("Solana RPC error: {0}")]
    RpcError(String),
}

/// TransactionError를 HTTP 응답으로 변환
impl From<TransactionError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: TransactionError) -> Self {
        let status = match &err {
            TransactionError::NotFound { .. } => StatusCode::NOT_FOUND,
            TransactionError::InvalidSignature { .. } => StatusCode::BAD_REQUEST,
            TransactionError::RpcError(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
