//! # Checkout HTTP Handlers
//!
//! Stripe Checkout 세션 생성과 결제 확인 엔드포인트입니다.
//!
//! # Security
//!
//! 결제 완료 판정은 절대 클라이언트 주장을 믿지 않습니다. `/confirmar`는
//! 항상 서버가 Stripe에서 세션을 직접 조회한 뒤에만 예약을 `pagado`로
//! 전이시킵니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/checkout/session` | 단건 결제 세션 생성 | 201 Created |
//! | `POST` | `/checkout/subscription` | 구독(식권 플랜) 세션 생성 | 201 Created |
//! | `POST` | `/checkout/connect-account` | Connect 연결 계정 생성 (admin) | 201 Created |
//! | `POST` | `/checkout/confirmar` | 결제 확인 (서버 검증) | 200 OK |

use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::checkout::{
    ConfirmarPagoRequest, ConnectAccountRequest, CreateCheckoutRequest, CreateSubscriptionRequest,
};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::payments::CheckoutService;

/// Checkout 세션 생성 핸들러
///
/// `precio_total`이 없으면 Stripe를 호출하기 전에 400으로 거부합니다.
/// 재고는 세션 생성 시점에 선점되며, Stripe 호출이 실패하면 되돌립니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/checkout/session`
///
/// # 요청 본문
///
/// ```json
/// {
///   "menu_id": "64f0c2a1b5e8d93f7a1c0001",
///   "cantidad": 2,
///   "precio_total": 7.00,
///   "descripcion": "Recogida 13:30"
/// }
/// ```
///
/// # 응답 (201 Created)
///
/// ```json
/// {
///   "session_id": "cs_test_a1B2...",
///   "url": "https://checkout.stripe.com/c/pay/cs_test_a1B2..."
/// }
/// ```
#[post("/session")]
pub async fn create_session(
    user: AuthenticatedUser,
    payload: web::Json<CreateCheckoutRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CheckoutService::instance();
    let response = service.create_session(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 구독 세션 생성 핸들러 (식권 플랜)
#[post("/subscription")]
pub async fn create_subscription(
    payload: web::Json<CreateSubscriptionRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CheckoutService::instance();
    let response = service
        .create_subscription_session(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// Connect 연결 계정 생성 핸들러 (admin 전용)
///
/// 온보딩 계약 단계에서 자동 발급되지만, 발급 실패 시 관리자가 수동으로
/// 재시도할 수 있습니다.
#[post("/connect-account")]
pub async fn create_connect_account(
    user: AuthenticatedUser,
    payload: web::Json<ConnectAccountRequest>,
) -> Result<HttpResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::AuthorizationError(
            "관리자 권한이 필요합니다".to_string(),
        ));
    }

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CheckoutService::instance();
    let response = service
        .create_connect_account(&payload.cafeteria_id)
        .await?;

    Ok(HttpResponse::Created().json(response))
}

/// 결제 확인 핸들러
///
/// Stripe에서 세션을 직접 조회하여 `payment_status == "paid"`인 경우에만
/// 예약을 `pagado`로 전이시킵니다. 같은 세션에 대한 반복 호출은 멱등하게
/// 현재 상태를 반환합니다.
///
/// # 응답
///
/// - `200 OK` - `{ "reserva_id": "...", "estado": "pagado" }`
/// - `409 Conflict` - Stripe 기준 결제 미완료
/// - `404 Not Found` - 세션에 대응하는 예약 없음
#[post("/confirmar")]
pub async fn confirmar(
    payload: web::Json<ConfirmarPagoRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = CheckoutService::instance();
    let response = service.confirmar(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}
