use crate::domains::auth::models::User;
use crate::shared::errors::AuthError;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

// 사용자 저장소
// User store (in-memory)
#[derive(Clone, Default)]
pub struct UserStore {
    inner: Arc<RwLock<UserStoreInner>>,
}

#[derive(Default)]
struct UserStoreInner {
    users: HashMap<u64, User>,
    by_email: HashMap<String, u64>,
    next_id: u64,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 생성 (이메일 중복 시 에러)
    /// Create a user; fails if the email is taken
    pub fn create_user(
        &self,
        email: &str,
        password_hash: &str,
        username: Option<&str>,
    ) -> Result<User, AuthError> {
        let mut inner = self.inner.write();

        if inner.by_email.contains_key(email) {
            return Err(AuthError::EmailAlreadyExists {
                email: email.to_string(),
            });
        }

        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            username: username.map(str::to_string),
            created_at: Utc::now(),
        };

        inner.by_email.insert(email.to_string(), user.id);
        inner.users.insert(user.id, user.clone());

        Ok(user)
    }

    /// 이메일로 사용자 조회
    pub fn get_by_email(&self, email: &str) -> Option<User> {
        let inner = self.inner.read();
        inner
            .by_email
            .get(email)
            .and_then(|id| inner.users.get(id))
            .cloned()
    }

    /// ID로 사용자 조회
    pub fn get_by_id(&self, id: u64) -> Option<User> {
        self.inner.read().users.get(&id).cloned()
    }

    /// 사용자명 변경
    /// Update the username
    pub fn update_username(&self, id: u64, username: Option<&str>) -> Result<User, AuthError> {
        let mut inner = self.inner.write();
        let user = inner
            .users
            .get_mut(&id)
            .ok_or(AuthError::UserNotFound { id })?;

        user.username = username.map(str::to_string);
        Ok(user.clone())
    }
}
