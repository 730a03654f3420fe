//! Reserva Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 예약 상태
///
/// `pagado` 전이는 결제 프로바이더에서 세션 상태를 서버가 직접 확인한
/// 경우에만 일어납니다 (클라이언트 주장만으로는 전이하지 않음).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstadoReserva {
    /// 생성됨, 결제 대기 중
    Pending,
    /// 결제 완료 확인됨
    Pagado,
    /// 수령 완료
    Completed,
    /// 취소됨
    Cancelado,
}

/// 예약 엔티티
///
/// 사용자의 메뉴 구매 기록입니다. Stripe Checkout 세션 ID를 보관하여
/// 결제 확인 시 세션을 역조회할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reserva {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 구매자
    pub user_id: ObjectId,
    /// 구매 대상 메뉴
    pub menu_id: ObjectId,
    /// 수량
    pub cantidad: i32,
    /// 총액 (EUR)
    pub precio_total: f64,
    /// 결제 상태
    pub estado: EstadoReserva,
    /// Stripe Checkout 세션 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_session_id: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Reserva {
    /// 결제 대기 상태의 새 예약을 생성합니다.
    pub fn new_pendiente(
        user_id: ObjectId,
        menu_id: ObjectId,
        cantidad: i32,
        precio_total: f64,
        stripe_session_id: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            menu_id,
            cantidad,
            precio_total,
            estado: EstadoReserva::Pending,
            stripe_session_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&EstadoReserva::Pagado).unwrap(),
            "\"pagado\""
        );
        assert_eq!(
            serde_json::to_string(&EstadoReserva::Pending).unwrap(),
            "\"pending\""
        );
    }

    #[test]
    fn test_new_pendiente_defaults() {
        let reserva = Reserva::new_pendiente(
            ObjectId::new(),
            ObjectId::new(),
            2,
            7.00,
            Some("cs_test_123".to_string()),
        );

        assert_eq!(reserva.estado, EstadoReserva::Pending);
        assert_eq!(reserva.cantidad, 2);
        assert!(reserva.id.is_none());
    }
}
