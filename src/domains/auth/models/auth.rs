use crate::domains::auth::models::UserResponse;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// 회원가입 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SignupRequest)]
pub struct SignupRequest {
    /// Email address
    /// 이메일 주소
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password (will be hashed)
    /// 비밀번호 (해싱됨)
    #[schema(example = "password123")]
    pub password: String,

    /// Username (optional)
    /// 사용자명 (선택사항)
    #[schema(example = "johndoe")]
    pub username: Option<String>,
}

// 회원가입 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SignupResponse)]
pub struct SignupResponse {
    /// User information (without password)
    /// 사용자 정보 (비밀번호 제외)
    pub user: UserResponse,

    /// Success message
    pub message: String,
}

// 로그인 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SigninRequest)]
pub struct SigninRequest {
    /// Email address
    #[schema(example = "user@example.com")]
    pub email: String,

    /// Password
    #[schema(example = "password123")]
    pub password: String,
}

// 로그인 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = SigninResponse)]
pub struct SigninResponse {
    /// User information (without password)
    pub user: UserResponse,

    /// JWT Access Token (짧은 수명)
    /// JWT access token (short lifetime)
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,

    /// Refresh Token (긴 수명, 해시로 저장됨)
    /// Refresh token (long lifetime, stored hashed)
    #[schema(example = "abc123def456...")]
    pub refresh_token: String,

    /// Success message
    pub message: String,
}

// 토큰 갱신 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RefreshTokenRequest)]
pub struct RefreshTokenRequest {
    /// Refresh Token
    #[schema(example = "abc123def456...")]
    pub refresh_token: String,
}

// 토큰 갱신 응답 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = RefreshTokenResponse)]
pub struct RefreshTokenResponse {
    /// 새 Access Token
    pub access_token: String,

    /// 새 Refresh Token (기존 토큰은 폐기됨)
    /// New refresh token (the old one is revoked)
    pub refresh_token: String,

    /// Success message
    pub message: String,
}

// 로그아웃 요청 모델
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = LogoutRequest)]
pub struct LogoutRequest {
    /// 폐기할 Refresh Token
    /// Refresh token to revoke
    pub refresh_token: String,
}
