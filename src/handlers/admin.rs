//! # Admin HTTP Handlers
//!
//! 백그라운드 잡을 수동으로 트리거하는 관리용 엔드포인트입니다.
//! 스케줄러와 같은 서비스 경로를 타므로 결과도 동일하게 멱등합니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/admin/jobs/materializar` | 오늘자 반복 메뉴 실체화 |
//! | `POST` | `/admin/jobs/expiraciones` | 만료 임박 알림 스캔 |
//! | `POST` | `/admin/jobs/stock-bajo` | 재고 부족 스캔 |

use actix_web::{post, HttpResponse};
use serde_json::json;

use crate::core::errors::AppError;
use crate::services::menus::{MenuService, RecurrenceService};

/// 반복 메뉴 실체화 수동 트리거
///
/// 부분 유니크 인덱스 덕분에 같은 날 여러 번 호출해도 중복 메뉴가
/// 생기지 않습니다.
///
/// # 응답 (200 OK)
///
/// ```json
/// { "fecha": "2026-08-28", "creados": 4, "omitidos": 11 }
/// ```
#[post("/jobs/materializar")]
pub async fn trigger_materializacion() -> Result<HttpResponse, AppError> {
    let service = RecurrenceService::instance();
    let resumen = service.materializar_hoy().await?;

    Ok(HttpResponse::Ok().json(resumen))
}

/// 만료 임박 알림 스캔 수동 트리거
///
/// `aviso_enviado` 플래그를 원자적으로 선점하므로 반복 호출해도
/// 템플릿당 알림은 한 번만 나갑니다.
#[post("/jobs/expiraciones")]
pub async fn trigger_expiraciones() -> Result<HttpResponse, AppError> {
    let service = RecurrenceService::instance();
    let notificados = service.notificar_expiraciones().await?;

    Ok(HttpResponse::Ok().json(json!({ "notificados": notificados })))
}

/// 재고 부족 스캔 수동 트리거
///
/// 오늘자 메뉴 중 재고가 임계값 이하인 것들을 찾아 구매자들에게
/// 알림을 팬아웃합니다.
#[post("/jobs/stock-bajo")]
pub async fn trigger_stock_bajo() -> Result<HttpResponse, AppError> {
    let service = MenuService::instance();
    let notificados = service.escanear_stock_bajo().await?;

    Ok(HttpResponse::Ok().json(json!({ "notificados": notificados })))
}
