use crate::domains::swap::models::{QuoteResponse, SwapTransactionRequest, SwapTransactionResponse};
use crate::shared::clients::JupiterClient;
use crate::shared::errors::SwapError;
use crate::shared::storage::{SwapRecord, SwapRecordStore};
use chrono::Utc;
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

// 스왑 서비스
// SwapService: handles swap-related business logic
// 역할: NestJS의 Service 같은 것
#[derive(Clone)]
pub struct SwapService {
    jupiter_client: JupiterClient,
    swap_records: SwapRecordStore,
}

impl SwapService {
    pub fn new(jupiter_client: JupiterClient, swap_records: SwapRecordStore) -> Self {
        Self {
            jupiter_client,
            swap_records,
        }
    }

    // 스왑 가격 조회 (비즈니스 로직)
    // Get swap quote (business logic)
    // amount는 네이티브 자산(SOL)의 whole unit
    pub async fn get_quote(
        &self,
        input_mint: &str,
        output_mint: &str,
        amount: f64,
    ) -> Result<QuoteResponse, SwapError> {
        if amount <= 0.0 {
            return Err(SwapError::InvalidAmount { amount });
        }

        self.jupiter_client
            .get_quote(input_mint, output_mint, amount)
            .await
            .map_err(|e| SwapError::Upstream(format!("{:#}", e)))
    }

    // 스왑 트랜잭션 생성 (비즈니스 로직)
    // Create swap transaction (business logic)
    //
    // 순서 고정: quote 조회가 완료된 후에만 swap POST를 보냄 (재시도/캐시 없음)
    // Strictly ordered: the swap POST goes out only after the quote completes.
    pub async fn create_swap_transaction(
        &self,
        request: SwapTransactionRequest,
    ) -> Result<SwapTransactionResponse, SwapError> {
        // 1. 지갑 공개 키 검증
        Pubkey::from_str(&request.user_public_key).map_err(|_| SwapError::InvalidPublicKey {
            key: request.user_public_key.clone(),
        })?;

        // 2. Quote 조회 (항상 새로 받음)
        let quote = self
            .get_quote(&request.input_mint, &request.output_mint, request.amount)
            .await?;

        debug!(
            input_mint = %request.input_mint,
            output_mint = %request.output_mint,
            amount = request.amount,
            out_amount = %quote.out_amount,
            "quote fetched for swap transaction"
        );

        // 3. Swap 트랜잭션 생성 (quote를 그대로 전달)
        let swap_obj = self
            .jupiter_client
            .get_swap_transaction(&quote, &request.user_public_key)
            .await
            .map_err(|e| SwapError::Upstream(format!("{:#}", e)))?;

        // 4. 예상 출력 금액은 quote에서 읽음
        let out_amount = quote.out_amount.clone();

        // 5. 스왑 레코드 저장
        let record = SwapRecord {
            id: Uuid::new_v4(),
            input_mint: request.input_mint,
            output_mint: request.output_mint,
            amount: request.amount,
            out_amount: out_amount.clone(),
            user_public_key: request.user_public_key,
            created_at: Utc::now(),
        };
        let id = record.id;
        self.swap_records.insert(record);

        Ok(SwapTransactionResponse {
            id,
            swap_obj,
            out_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::GLOBAL_SLIPPAGE_BPS;

    fn service() -> SwapService {
        let client = JupiterClient::new("http://127.0.0.1:9", GLOBAL_SLIPPAGE_BPS).unwrap();
        SwapService::new(client, SwapRecordStore::new())
    }

    #[tokio::test]
    async fn rejects_non_positive_amount() {
        let swap = service();

        let result = swap.get_quote("MintA", "MintB", 0.0).await;
        assert!(matches!(result, Err(SwapError::InvalidAmount { .. })));

        let result = swap.get_quote("MintA", "MintB", -1.0).await;
        assert!(matches!(result, Err(SwapError::InvalidAmount { .. })));
    }

    #[tokio::test]
    async fn rejects_malformed_public_key() {
        let swap = service();

        let result = swap
            .create_swap_transaction(SwapTransactionRequest {
                input_mint: "So11111111111111111111111111111111111111112".to_string(),
                output_mint: "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v".to_string(),
                amount: 1.0,
                user_public_key: "not-a-pubkey".to_string(),
            })
            .await;

        assert!(matches!(result, Err(SwapError::InvalidPublicKey { .. })));
    }
}
