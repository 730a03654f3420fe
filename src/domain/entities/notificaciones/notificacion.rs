//! Notificacion Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoNotificacion {
    /// 메뉴 재고가 임계값 이하로 떨어짐
    StockBajo,
    /// 반복 메뉴 종료일이 알림 윈도우에 진입
    RecurrenciaPorVencer,
    /// 카페테리아 온보딩 상태 변경
    Onboarding,
}

/// 알림 엔티티
///
/// 사용자별 인앱 알림 한 건입니다. 이메일 발송 여부는 별도 플래그로
/// 추적하여 인앱 알림과 이메일을 독립적으로 처리합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notificacion {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 수신자
    pub user_id: ObjectId,
    /// 알림 종류
    pub tipo: TipoNotificacion,
    /// 제목
    pub titulo: String,
    /// 본문
    pub mensaje: String,
    /// 관련 메뉴 (재고/만료 알림일 때)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_id: Option<ObjectId>,
    /// 읽음 여부
    #[serde(default)]
    pub leida: bool,
    /// 이메일로도 발송되었는지 여부
    #[serde(default)]
    pub email_enviado: bool,
    /// 생성 시간
    pub created_at: DateTime,
}

impl Notificacion {
    /// 새 알림 생성 (미읽음, 이메일 미발송 상태)
    pub fn new(
        user_id: ObjectId,
        tipo: TipoNotificacion,
        titulo: String,
        mensaje: String,
        menu_id: Option<ObjectId>,
    ) -> Self {
        Self {
            id: None,
            user_id,
            tipo,
            titulo,
            mensaje,
            menu_id,
            leida: false,
            email_enviado: false,
            created_at: DateTime::now(),
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
    fn test_tipo_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&TipoNotificacion::StockBajo).unwrap(),
            "\"stock_bajo\""
        );
        assert_eq!(
            serde_json::to_string(&TipoNotificacion::RecurrenciaPorVencer).unwrap(),
            "\"recurrencia_por_vencer\""
        );
    }

    #[test]
    fn test_new_notificacion_defaults() {
        let noti = Notificacion::new(
            ObjectId::new(),
            TipoNotificacion::StockBajo,
            "Quedan pocas unidades".to_string(),
            "Paella de verduras: 3 unidades restantes".to_string(),
            Some(ObjectId::new()),
        );

        assert!(!noti.leida);
        assert!(!noti.email_enviado);
        assert!(noti.menu_id.is_some());
    }
}
