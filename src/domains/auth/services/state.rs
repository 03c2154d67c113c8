// Auth domain state
// 인증 도메인 상태
use crate::domains::auth::services::{AuthService, JwtService};
use crate::shared::storage::{RefreshTokenStore, UserStore};

/// Auth domain state
/// 인증 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct AuthState {
    pub auth_service: AuthService,
    pub jwt_service: JwtService,
}

impl AuthState {
    /// AuthState 생성
    pub fn new(
        users: UserStore,
        refresh_tokens: RefreshTokenStore,
        jwt_service: JwtService,
    ) -> Self {
        Self {
            auth_service: AuthService::new(users, refresh_tokens, jwt_service.clone()),
            jwt_service,
        }
    }
}
