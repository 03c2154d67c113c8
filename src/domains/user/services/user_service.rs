use crate::domains::auth::models::User;
use crate::shared::errors::AuthError;
use crate::shared::storage::UserStore;

// 사용자 프로필 서비스
// UserService: profile read/update for authenticated users
#[derive(Clone)]
pub struct UserService {
    users: UserStore,
}

impl UserService {
    pub fn new(users: UserStore) -> Self {
        Self { users }
    }

    /// 프로필 조회
    pub fn get_profile(&self, user_id: u64) -> Result<User, AuthError> {
        self.users
            .get_by_id(user_id)
            .ok_or(AuthError::UserNotFound { id: user_id })
    }

    /// 프로필 수정 (사용자명)
    pub fn update_profile(
        &self,
        user_id: u64,
        username: Option<&str>,
    ) -> Result<User, AuthError> {
        self.users.update_username(user_id, username)
    }
}
