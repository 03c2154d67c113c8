use crate::domains::transaction::models::{
    TransactionListQuery, TransactionListResponse, TransactionRecordResponse,
    TransactionStatusResponse,
};
use crate::shared::errors::TransactionError;
use crate::shared::services::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

/// 스왑 레코드 목록 조회 핸들러
/// List recorded swap transactions (optionally filtered by wallet)
#[utoipa::path(
    get,
    path = "/api/v1/transactions",
    params(TransactionListQuery),
    responses(
        (status = 200, description = "Recorded swap transactions", body = TransactionListResponse)
    ),
    tag = "Transactions"
)]
pub async fn list_transactions(
    State(app_state): State<AppState>,
    Query(query): Query<TransactionListQuery>,
) -> Json<TransactionListResponse> {
    let transactions = app_state
        .transaction_state
        .transaction_service
        .list_records(query.user_public_key.as_deref())
        .into_iter()
        .map(TransactionRecordResponse::from)
        .collect();

    Json(TransactionListResponse { transactions })
}

/// 스왑 레코드 단건 조회 핸들러
/// Get a single recorded swap transaction
#[utoipa::path(
    get,
    path = "/api/v1/transactions/{id}",
    params(
        ("id" = Uuid, Path, description = "Record id")
    ),
    responses(
        (status = 200, description = "Record found", body = TransactionRecordResponse),
        (status = 404, description = "Record not found")
    ),
    tag = "Transactions"
)]
pub async fn get_transaction(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TransactionRecordResponse>, (StatusCode, Json<serde_json::Value>)> {
    let record = app_state
        .transaction_state
        .transaction_service
        .get_record(id)
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(record.into()))
}

/// 온체인 트랜잭션 상태 조회 핸들러
/// Get on-chain status for a transaction signature
#[utoipa::path(
    get,
    path = "/api/v1/transactions/status/{signature}",
    params(
        ("signature" = String, Path, description = "Base58 transaction signature")
    ),
    responses(
        (status = 200, description = "Signature status", body = TransactionStatusResponse),
        (status = 400, description = "Malformed signature"),
        (status = 502, description = "Solana RPC error")
    ),
    tag = "Transactions"
)]
pub async fn get_transaction_status(
    State(app_state): State<AppState>,
    Path(signature): Path<String>,
) -> Result<Json<TransactionStatusResponse>, (StatusCode, Json<serde_json::Value>)> {
    let status = app_state
        .transaction_state
        .transaction_service
        .get_signature_status(&signature)
        .await
        .map_err(|e: TransactionError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(status))
}
