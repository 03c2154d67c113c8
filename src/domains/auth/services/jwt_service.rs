use crate::domains::auth::models::jwt::Claims;
use crate::shared::errors::AuthError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

/// JWT 서비스
/// JWT Service for token generation and verification
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// JWT Service 생성
    pub fn new(secret: String) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        Self {
            encoding_key,
            decoding_key,
        }
    }

    /// Access Token 발급 (짧은 수명)
    /// Generate access token (short lifetime)
    pub fn generate_access_token(&self, user_id: u64, email: String) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, email, 1); // 1시간 만료

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
    }

    /// Refresh Token 생성 (랜덤 문자열, 해시로 저장할 것)
    /// Generate refresh token (random string, to be stored hashed)
    pub fn generate_refresh_token(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    /// Refresh Token 해싱 (저장용)
    /// Hash refresh token (for storage)
    pub fn hash_refresh_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Access Token 검증
    /// Verify access token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}
