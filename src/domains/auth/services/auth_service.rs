use crate::domains::auth::models::{SigninRequest, SignupRequest, User};
use crate::domains::auth::services::JwtService;
use crate::shared::errors::AuthError;
use crate::shared::storage::{RefreshTokenStore, UserStore};
use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};

// 인증 서비스
// AuthService: handles authentication business logic
// 역할: NestJS의 Service 같은 것
#[derive(Clone)]
pub struct AuthService {
    users: UserStore,
    refresh_tokens: RefreshTokenStore,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(users: UserStore, refresh_tokens: RefreshTokenStore, jwt_service: JwtService) -> Self {
        Self {
            users,
            refresh_tokens,
            jwt_service,
        }
    }

    // 회원가입 (비즈니스 로직)
    pub async fn signup(&self, request: SignupRequest) -> Result<User, AuthError> {
        // 1. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 2. 사용자 생성 (이메일 중복은 store에서 확인)
        let user = self.users.create_user(
            &request.email,
            &password_hash,
            request.username.as_deref(),
        )?;

        Ok(user)
    }

    // 로그인 (비즈니스 로직)
    // Returns: (User, refresh_token)
    pub async fn signin(&self, request: SigninRequest) -> Result<(User, String), AuthError> {
        // 1. 이메일로 사용자 조회
        let user = self
            .users
            .get_by_email(&request.email)
            .ok_or(AuthError::InvalidCredentials)?;

        // 2. 비밀번호 검증
        Self::verify_password(&request.password, &user.password_hash)?;

        // 3. 이전 Refresh Token들 무효화 (새 로그인 시 기존 세션 종료)
        self.refresh_tokens.revoke_all_for_user(user.id);

        // 4. 새 Refresh Token 생성 및 저장
        let refresh_token = self.create_refresh_token(user.id);

        Ok((user, refresh_token))
    }

    /// Refresh Token 생성 및 저장 (해시만 저장, 원본 반환)
    /// Create a refresh token; the store keeps only the hash
    pub fn create_refresh_token(&self, user_id: u64) -> String {
        let refresh_token = self.jwt_service.generate_refresh_token();
        let token_hash = self.jwt_service.hash_refresh_token(&refresh_token);

        // 만료 시간: 7일
        let expires_at = Utc::now() + Duration::days(7);
        self.refresh_tokens.insert(token_hash, user_id, expires_at);

        refresh_token
    }

    /// Refresh Token 검증 및 새 토큰 쌍 발급 (rotation)
    /// Verify the refresh token and issue a new token pair
    pub async fn refresh_access_token(
        &self,
        refresh_token: &str,
    ) -> Result<(String, String), AuthError> {
        // 1. 토큰 해시로 조회 (만료/폐기 체크 포함)
        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);
        let user_id = self
            .refresh_tokens
            .find_valid(&token_hash)
            .ok_or(AuthError::InvalidToken)?;

        let user = self
            .users
            .get_by_id(user_id)
            .ok_or(AuthError::UserNotFound { id: user_id })?;

        // 2. 기존 토큰 폐기 후 새 쌍 발급 (재사용 방지)
        self.refresh_tokens.revoke(&token_hash);
        let access_token = self
            .jwt_service
            .generate_access_token(user.id, user.email.clone())?;
        let new_refresh_token = self.create_refresh_token(user.id);

        Ok((access_token, new_refresh_token))
    }

    // 로그아웃: Refresh Token 폐기
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);

        if !self.refresh_tokens.revoke(&token_hash) {
            return Err(AuthError::InvalidToken);
        }

        Ok(())
    }

    /// 사용자 조회 (me 엔드포인트용)
    pub fn get_user(&self, user_id: u64) -> Result<User, AuthError> {
        self.users
            .get_by_id(user_id)
            .ok_or(AuthError::UserNotFound { id: user_id })
    }

    /// 비밀번호 해싱 (argon2)
    fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// 비밀번호 검증
    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordHashingFailed(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)
    }
}
