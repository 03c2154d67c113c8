use crate::domains::transaction::models::TransactionStatusResponse;
use crate::shared::errors::TransactionError;
use crate::shared::storage::{SwapRecord, SwapRecordStore};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signature;
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

// 트랜잭션 서비스
// TransactionService: swap record lookups and on-chain status checks
#[derive(Clone)]
pub struct TransactionService {
    swap_records: SwapRecordStore,
    rpc_client: Arc<RpcClient>,
}

impl TransactionService {
    pub fn new(swap_records: SwapRecordStore, rpc_url: &str) -> Self {
        Self {
            swap_records,
            rpc_client: Arc::new(RpcClient::new(rpc_url.to_string())),
        }
    }

    /// 레코드 목록 (지갑 주소 필터 가능)
    pub fn list_records(&self, user_public_key: Option<&str>) -> Vec<SwapRecord> {
        self.swap_records.list(user_public_key)
    }

    /// ID로 레코드 조회
    pub fn get_record(&self, id: Uuid) -> Result<SwapRecord, TransactionError> {
        self.swap_records
            .get(id)
            .ok_or(TransactionError::NotFound { id })
    }

    /// 온체인 트랜잭션 상태 조회
    /// Look up on-chain signature status via RPC
    pub async fn get_signature_status(
        &self,
        signature: &str,
    ) -> Result<TransactionStatusResponse, TransactionError> {
        // 1. 서명 파싱
        let parsed = Signature::from_str(signature).map_err(|_| {
            TransactionError::InvalidSignature {
                signature: signature.to_string(),
            }
        })?;

        // 2. RPC 조회
        let status = self
            .rpc_client
            .get_signature_status(&parsed)
            .await
            .map_err(|e| TransactionError::RpcError(e.to_string()))?;

        // 3. 상태 매핑
        let response = match status {
            Some(Ok(())) => TransactionStatusResponse {
                signature: signature.to_string(),
                status: "confirmed".to_string(),
                error: None,
            },
            Some(Err(tx_err)) => TransactionStatusResponse {
                signature: signature.to_string(),
                status: "failed".to_string(),
                error: Some(tx_err.to_string()),
            },
            // RPC가 모르는 서명 (너무 오래됐거나 미전파)
            None => TransactionStatusResponse {
                signature: signature.to_string(),
                status: "unknown".to_string(),
                error: None,
            },
        };

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> TransactionService {
        TransactionService::new(SwapRecordStore::new(), "http://127.0.0.1:8899")
    }

    #[test]
    fn missing_record_is_not_found() {
        let tx = service();
        let id = Uuid::new_v4();
        assert!(matches!(
            tx.get_record(id),
            Err(TransactionError::NotFound { .. })
        ));
    }

    #[test]
    fn lists_stored_records() {
        let store = SwapRecordStore::new();
        store.insert(SwapRecord {
            id: Uuid::new_v4(),
            input_mint: "A".to_string(),
            output_mint: "B".to_string(),
            amount: 1.0,
            out_amount: "1".to_string(),
            user_public_key: "wallet".to_string(),
            created_at: Utc::now(),
        });

        let tx = TransactionService::new(store, "http://127.0.0.1:8899");
        assert_eq!(tx.list_records(None).len(), 1);
        assert_eq!(tx.list_records(Some("other")).len(), 0);
    }

    #[tokio::test]
    async fn malformed_signature_is_rejected_before_rpc() {
        let tx = service();
        let result = tx.get_signature_status("not-a-signature").await;
        assert!(matches!(
            result,
            Err(TransactionError::InvalidSignature { .. })
        ));
    }
}
