//! 알림 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::notificaciones::{Notificacion, TipoNotificacion};

/// 인앱 알림 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificacionResponse {
    pub id: String,
    pub tipo: TipoNotificacion,
    pub titulo: String,
    pub mensaje: String,
    pub menu_id: Option<String>,
    pub leida: bool,
    pub created_at: DateTime,
}

impl From<Notificacion> for NotificacionResponse {
    fn from(noti: Notificacion) -> Self {
        let Notificacion {
            id,
            tipo,
            titulo,
            mensaje,
            menu_id,
            leida,
            created_at,
            ..
        } = noti;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            tipo,
            titulo,
            mensaje,
            menu_id: menu_id.map(|id| id.to_hex()),
            leida,
            created_at,
        }
    }
}
