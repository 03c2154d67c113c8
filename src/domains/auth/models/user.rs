use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 엔티티 (내부용, 비밀번호 해시 포함)
/// User entity (internal, carries the password hash)
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub password_hash: String,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

// 사용자 응답 모델 (비밀번호 제외)
// User response model (without password)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UserResponse)]
pub struct UserResponse {
    /// 사용자 ID
    pub id: u64,

    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// 사용자명
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// 가입 시각
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            created_at: user.created_at,
        }
    }
}
