// Swap domain state
// 스왑 도메인 상태
use crate::domains::swap::services::SwapService;
use crate::shared::clients::JupiterClient;
use crate::shared::storage::SwapRecordStore;

/// Swap domain state
/// 스왑 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct SwapState {
    pub swap_service: SwapService,
}

impl SwapState {
    pub fn new(jupiter_client: JupiterClient, swap_records: SwapRecordStore) -> Self {
        Self {
            swap_service: SwapService::new(jupiter_client, swap_records),
        }
    }
}
