//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰의 생성, 검증, 갱신을 담당합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::entities::users::User,
    domain::models::token::{TokenClaims, TokenPair},
};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 클레임에는 사용자 ID, 역할, 소속 카페테리아만 포함합니다.
pub struct TokenService {
    // 외부 의존성 없음
}

impl TokenService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| TokenService {})
    }

    fn build_claims(&self, user: &User, expiration: Duration) -> AppResult<TokenClaims> {
        let now = Utc::now();

        Ok(TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            rol: user.rol.as_str().to_string(),
            cafeteria_id: user.cafeteria_id.as_ref().map(|id| id.to_hex()),
            iat: now.timestamp(),
            exp: (now + expiration).timestamp(),
        })
    }

    fn sign(&self, claims: &TokenClaims) -> AppResult<String> {
        let secret = JwtConfig::secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), claims, &encoding_key).context("JWT 토큰 생성 실패")
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn generate_access_token(&self, user: &User) -> AppResult<String> {
        let claims = self.build_claims(user, Duration::hours(JwtConfig::expiration_hours()))?;
        self.sign(&claims)
    }

    /// 사용자를 위한 리프레시 토큰 생성
    ///
    /// # Security
    ///
    /// 리프레시 토큰은 Secure HttpOnly Cookie에 저장하는 것을 권장합니다.
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let claims =
            self.build_claims(user, Duration::days(JwtConfig::refresh_expiration_days()))?;
        self.sign(&claims)
    }

    /// 토큰 쌍 생성 (액세스 + 리프레시)
    pub fn generate_token_pair(&self, user: &User) -> AppResult<TokenPair> {
        let access_token = self.generate_access_token(user)?;
        let refresh_token = self.generate_refresh_token(user)?;
        let expires_in = JwtConfig::expiration_hours() * 3600; // 초 단위로 변환

        Ok(TokenPair {
            access_token,
            refresh_token: Some(refresh_token),
            expires_in,
        })
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
                }
                _ => AppError::InternalError(format!("토큰 검증 실패: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을
    /// 추출합니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            ))
        }
    }
}

#[async_trait]
impl Service for TokenService {
    fn name(&self) -> &str {
        "token_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn token_service_construct() -> Arc<dyn Service> {
    TokenService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "token_service",
        construct: token_service_construct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::UserRole;
    use mongodb::bson::oid::ObjectId;

    fn usuario() -> User {
        let mut user = User::new(
            "ana@uni.example".to_string(),
            "Ana García".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Student,
        );
        user.id = Some(ObjectId::new());
        user
    }

    #[test]
    fn test_generate_and_verify_roundtrip() {
        let service = TokenService {};
        let user = usuario();

        let token = service.generate_access_token(&user).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user.id_string().unwrap());
        assert_eq!(claims.rol, "student");
        assert!(claims.cafeteria_id.is_none());
    }

    #[test]
    fn test_verify_garbage_token_fails() {
        let service = TokenService {};

        assert!(service.verify_token("no-es-un-jwt").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let service = TokenService {};

        assert_eq!(
            service.extract_bearer_token("Bearer abc123").unwrap(),
            "abc123"
        );
        assert!(service.extract_bearer_token("Basic abc123").is_err());
    }

    #[test]
    fn test_user_without_id_fails() {
        let service = TokenService {};
        let mut user = usuario();
        user.id = None;

        assert!(service.generate_access_token(&user).is_err());
    }
}
