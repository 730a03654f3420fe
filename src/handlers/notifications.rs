//! # Notification HTTP Handlers
//!
//! 로그인한 사용자 본인의 인앱 알림 조회/읽음 처리 핸들러입니다.

use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

use crate::core::errors::AppError;
use crate::domain::dto::notifications::NotificacionResponse;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::notifications::NotificationService;

const DEFAULT_LIMIT: i64 = 50;

/// 알림 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct ListarNotificacionesQuery {
    /// 최대 반환 수 (기본 50, 최대 200)
    pub limit: Option<i64>,
}

/// 내 알림 목록 조회 핸들러 (최신순)
#[get("")]
pub async fn listar(
    user: AuthenticatedUser,
    query: web::Query<ListarNotificacionesQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, 200);

    let service = NotificationService::instance();
    let notificaciones = service.listar(&user.user_id, limit).await?;

    let response: Vec<NotificacionResponse> = notificaciones
        .into_iter()
        .map(NotificacionResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(response))
}

/// 알림 읽음 처리 핸들러
///
/// 본인 소유 알림만 처리할 수 있으며, 남의 알림 ID는 404로 응답합니다.
#[post("/{notificacion_id}/leida")]
pub async fn marcar_leida(
    user: AuthenticatedUser,
    notificacion_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = NotificationService::instance();
    service.marcar_leida(&user.user_id, &notificacion_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
