use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use crate::shared::errors::AuthError;
use crate::shared::services::AppState;

/// 인증된 사용자 정보 (JWT 토큰에서 추출)
/// Authenticated user information (extracted from JWT token)
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: u64,
    pub email: String,
}

/// Authorization 헤더에서 Bearer 토큰 추출
fn bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get("Authorization")
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::InvalidToken)?;

    header.strip_prefix("Bearer ").ok_or(AuthError::InvalidToken)
}

/// AuthenticatedUser를 Axum Extractor로 구현
/// 역할: NestJS의 @UseGuards(AuthGuard) 같은 것
///
/// 핸들러 인자에 `authenticated_user: AuthenticatedUser`를 추가하면
/// 토큰 검증이 자동으로 수행됨
#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = (StatusCode, axum::Json<serde_json::Value>);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Bearer 토큰 추출
        let token = bearer_token(parts)
            .map_err(|e: AuthError| -> (StatusCode, axum::Json<serde_json::Value>) { e.into() })?;

        // 2. JWT Service로 토큰 검증 (AppState에서 가져옴)
        let claims = state
            .auth_state
            .jwt_service
            .verify_access_token(token)
            .map_err(|e: AuthError| -> (StatusCode, axum::Json<serde_json::Value>) { e.into() })?;

        Ok(AuthenticatedUser {
            user_id: claims.user_id,
            email: claims.email,
        })
    }
}
