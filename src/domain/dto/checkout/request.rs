//! Checkout 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Checkout 세션 생성 요청 DTO
///
/// `precio_total`은 Option으로 받되 서비스 계층에서 부재 시 400을
/// 반환합니다. 프로바이더 호출 전에 반드시 검증됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCheckoutRequest {
    /// 구매 대상 메뉴 ID
    #[validate(length(min = 1, message = "menu_id가 필요합니다"))]
    pub menu_id: String,

    /// 구매 수량
    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub cantidad: i32,

    /// 총액 (EUR). 없으면 세션을 생성하지 않고 400을 반환합니다.
    pub precio_total: Option<f64>,

    /// 결제 페이지에 표시할 설명 (선택)
    pub descripcion: Option<String>,
}

/// 구독(식권 플랜) 세션 생성 요청 DTO
///
/// 월 단위 반복 결제 세션을 만듭니다. 가격은 인라인 price_data로
/// 전달되며 서버가 센트 단위로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSubscriptionRequest {
    /// 플랜 이름 (결제 페이지에 표시)
    #[validate(length(min = 1, max = 100, message = "nombre가 필요합니다"))]
    pub nombre: String,

    /// 월 요금 (EUR)
    #[validate(range(min = 0.01, message = "precio_mensual은 0보다 커야 합니다"))]
    pub precio_mensual: f64,
}

/// Connect 연결 계정 생성 요청 DTO (admin 전용)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConnectAccountRequest {
    /// 대상 카페테리아 ID
    #[validate(length(min = 1, message = "cafeteria_id가 필요합니다"))]
    pub cafeteria_id: String,
}

/// 결제 확인 요청 DTO
///
/// 클라이언트는 세션 ID만 전달하고, 결제 여부는 서버가 Stripe에
/// 직접 조회하여 판정합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmarPagoRequest {
    /// Checkout 세션 ID
    #[validate(length(min = 1, message = "session_id가 필요합니다"))]
    pub session_id: String,
}
