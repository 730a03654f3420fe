//! # User Management HTTP Handlers
//!
//! 로그인한 사용자 본인의 정보 조회와 알림 수신 설정 변경 핸들러입니다.
//! 모든 엔드포인트는 인증 미들웨어 뒤에 배치됩니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/me` | 내 정보 조회 | 200 OK |
//! | `PATCH` | `/me/preferencias` | 알림 수신 설정 부분 변경 | 200 OK |

use actix_web::{get, patch, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::{UpdatePreferenciasRequest, UserResponse};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::users::UserService;

/// 내 정보 조회 핸들러
///
/// 토큰의 사용자 ID로 본인 계정을 조회합니다. 비밀번호 해시 등
/// 민감한 필드는 응답에서 제외됩니다.
#[get("")]
pub async fn get_me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();
    let me = service.get_user(&user.user_id).await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(me)))
}

/// 알림 수신 설정 변경 핸들러
///
/// 전달된 필드만 갱신하는 부분 업데이트입니다. 본문이 비어 있으면
/// 현재 상태를 그대로 반환합니다.
///
/// # 요청 본문
///
/// ```json
/// { "avisos_stock": false }
/// ```
#[patch("/preferencias")]
pub async fn update_preferencias(
    user: AuthenticatedUser,
    payload: web::Json<UpdatePreferenciasRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance();
    let updated = service
        .update_preferencias(&user.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}
