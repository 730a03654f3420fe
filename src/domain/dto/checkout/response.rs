//! Checkout 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::entities::reservas::{EstadoReserva, Reserva};

/// Checkout 세션 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSessionResponse {
    /// Stripe 세션 ID
    pub session_id: String,
    /// 클라이언트를 리다이렉트할 결제 페이지 URL
    pub url: Option<String>,
}

/// 결제 확인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmacionResponse {
    /// 확인된 예약 ID
    pub reserva_id: String,
    /// 확인 후 예약 상태 (예: "pagado")
    pub estado: String,
}

/// 예약 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservaResponse {
    pub id: String,
    pub menu_id: String,
    pub cantidad: i32,
    pub precio_total: f64,
    pub estado: EstadoReserva,
    pub stripe_session_id: Option<String>,
}

impl From<Reserva> for ReservaResponse {
    fn from(reserva: Reserva) -> Self {
        Self {
            id: reserva.id.map(|id| id.to_hex()).unwrap_or_default(),
            menu_id: reserva.menu_id.to_hex(),
            cantidad: reserva.cantidad,
            precio_total: reserva.precio_total,
            estado: reserva.estado,
            stripe_session_id: reserva.stripe_session_id,
        }
    }
}

/// Connect 연결 계정 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectAccountResponse {
    /// Stripe 연결 계정 ID
    pub account_id: String,
}
