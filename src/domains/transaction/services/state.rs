// Transaction domain state
use crate::domains::transaction::services::TransactionService;
use crate::shared::storage::SwapRecordStore;

/// Transaction domain state
#[derive(Clone)]
pub struct TransactionState {
    pub transaction_service: TransactionService,
}

impl TransactionState {
    pub fn new(swap_records: SwapRecordStore, rpc_url: &str) -> Self {
        Self {
            transaction_service: TransactionService::new(swap_records, rpc_url),
        }
    }
}
