//! # Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 검증 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/auth/register` | 구매자 계정 생성 | 201 Created |
//! | `POST` | `/auth/login` | 이메일/비밀번호 로그인 | 200 OK |
//! | `POST` | `/auth/verify` | Bearer 토큰 검증 | 200 OK |

use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{CreateUserRequest, LoginRequest, UserResponse};
use crate::services::auth::TokenService;
use crate::services::users::UserService;

/// 구매자 계정 생성 핸들러
///
/// `rol`은 `student`(기본값) 또는 `office_user`만 허용됩니다.
/// cafeteria/admin 계정은 이 엔드포인트로 만들 수 없습니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "ana@uni.example",
///   "nombre": "Ana",
///   "password": "Secure123",
///   "rol": "student"
/// }
/// ```
///
/// # 응답
///
/// - `201 Created` - 생성된 사용자 (비밀번호 해시 제외)
/// - `400 Bad Request` - 검증 실패 (이메일 형식, 비밀번호 강도)
/// - `409 Conflict` - 이미 사용 중인 이메일
#[post("/register")]
pub async fn register(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let user = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 로그인 핸들러
///
/// 이메일/비밀번호로 인증하고 JWT 토큰 쌍을 발급합니다.
/// 존재하지 않는 이메일과 잘못된 비밀번호는 같은 메시지로 응답합니다
/// (계정 존재 여부 노출 방지).
///
/// # 엔드포인트
///
/// `POST /api/v1/auth/login`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "user": { "id": "...", "email": "...", "rol": "student" },
///   "access_token": "eyJ...",
///   "refresh_token": "eyJ...",
///   "token_type": "Bearer",
///   "expires_in": 86400
/// }
/// ```
#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 검증 핸들러
///
/// Authorization 헤더의 Bearer 토큰을 검증하고 클레임을 반환합니다.
/// 게이트웨이나 다른 백엔드 서비스가 토큰 유효성을 확인할 때 사용합니다.
#[post("/verify")]
pub async fn verify_token(req: HttpRequest) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let service = TokenService::instance();
    let token = service.extract_bearer_token(auth_header)?;
    let claims = service.verify_token(token)?;

    Ok(HttpResponse::Ok().json(json!({
        "valid": true,
        "user_id": claims.sub,
        "rol": claims.rol,
        "cafeteria_id": claims.cafeteria_id,
        "expires_at": claims.exp,
    })))
}
