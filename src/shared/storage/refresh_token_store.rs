use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// 저장된 Refresh Token (해시 키로 저장)
/// Stored refresh token, keyed by its hash
#[derive(Debug, Clone)]
pub struct RefreshTokenEntry {
    pub user_id: u64,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

// Refresh Token 저장소
// Refresh token store (in-memory)
// Note: 원본 토큰이 아니라 해시만 저장함
#[derive(Clone, Default)]
pub struct RefreshTokenStore {
    inner: Arc<RwLock<HashMap<String, RefreshTokenEntry>>>,
}

impl RefreshTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 토큰 저장
    pub fn insert(&self, token_hash: String, user_id: u64, expires_at: DateTime<Utc>) {
        self.inner.write().insert(
            token_hash,
            RefreshTokenEntry {
                user_id,
                expires_at,
                revoked: false,
            },
        );
    }

    /// 유효한 토큰 조회 (만료/폐기 체크)
    /// Find a valid (unexpired, unrevoked) token; returns the owning user id
    pub fn find_valid(&self, token_hash: &str) -> Option<u64> {
        let inner = self.inner.read();
        let entry = inner.get(token_hash)?;

        if entry.revoked || entry.expires_at <= Utc::now() {
            return None;
        }

        Some(entry.user_id)
    }

    /// 단일 토큰 폐기
    /// Revoke a single token; returns whether it existed
    pub fn revoke(&self, token_hash: &str) -> bool {
        let mut inner = self.inner.write();
        match inner.get_mut(token_hash) {
            Some(entry) => {
                entry.revoked = true;
                true
            }
            None => false,
        }
    }

    /// 사용자의 모든 토큰 폐기 (새 로그인 시 기존 세션 종료)
    /// Revoke all tokens for a user (ends existing sessions on new signin)
    pub fn revoke_all_for_user(&self, user_id: u64) {
        let mut inner = self.inner.write();
        for entry in inner.values_mut() {
            if entry.user_id == user_id {
                entry.revoked = true;
            }
        }
    }
}
