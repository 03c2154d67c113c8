use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

/// 생성된 스왑 트랜잭션 레코드
/// Record of a swap transaction built via Jupiter
#[derive(Debug, Clone)]
pub struct SwapRecord {
    pub id: Uuid,
    pub input_mint: String,
    pub output_mint: String,
    /// 스왑 수량 (네이티브 자산 whole unit)
    pub amount: f64,
    /// Quote에서 읽은 예상 출력 금액
    pub out_amount: String,
    pub user_public_key: String,
    pub created_at: DateTime<Utc>,
}

// 스왑 레코드 저장소 (생성 순서 유지)
// Swap record store, insertion-ordered
#[derive(Clone, Default)]
pub struct SwapRecordStore {
    inner: Arc<RwLock<Vec<SwapRecord>>>,
}

impl SwapRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 레코드 추가
    pub fn insert(&self, record: SwapRecord) {
        self.inner.write().push(record);
    }

    /// ID로 조회
    pub fn get(&self, id: Uuid) -> Option<SwapRecord> {
        self.inner.read().iter().find(|r| r.id == id).cloned()
    }

    /// 레코드 목록 (지갑 주소로 필터 가능)
    /// List records, optionally filtered by wallet public key
    pub fn list(&self, user_public_key: Option<&str>) -> Vec<SwapRecord> {
        self.inner
            .read()
            .iter()
            .filter(|r| user_public_key.is_none_or(|key| r.user_public_key == key))
            .cloned()
            .collect()
    }
}
