use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 프로필 수정 요청 모델
// Profile update request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateProfileRequest)]
pub struct UpdateProfileRequest {
    /// 새 사용자명 (None이면 사용자명 제거)
    /// New username (None clears it)
    #[schema(example = "johndoe")]
    pub username: Option<String>,
}
