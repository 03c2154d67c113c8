use thiserror::Error;
use axum::{http::StatusCode, Json};
use serde_json::json;

/// 스왑 관련 에러
/// Swap-related errors
#[derive(Error, Debug)]
pub enum SwapError {
    /// 스왑 수량이 0 이하
    /// Non-positive swap amount
    #[error("Swap amount must be positive, got {amount}")]
    InvalidAmount { amount: f64 },

    /// 잘못된 사용자 공개 키
    /// Invalid user public key
    #[error("Invalid user public key: {key}")]
    InvalidPublicKey { key: String },

    /// Jupiter API 호출 실패 (네트워크, 비-2xx, 파싱)
    /// Jupiter API call failed (transport, non-2xx, decode)
    #[error("Jupiter API error: {0}")]
    Upstream(String),
}

/// SwapError를 HTTP 응답으로 변환
impl From<SwapError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: SwapError) -> Self {
        let status = match &err {
            SwapError::InvalidAmount { .. } => StatusCode::BAD_REQUEST,
            SwapError::InvalidPublicKey { .. } => StatusCode::BAD_REQUEST,
            SwapError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
