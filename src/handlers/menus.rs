//! # Menu HTTP Handlers
//!
//! 메뉴 게시, 조회, 재고 조정, 직접 예약, 수요 예측 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 권한 |
//! |--------|------|------|------|
//! | `POST` | `/menus` | 메뉴 게시 (일일/반복) | cafeteria |
//! | `GET` | `/menus` | 날짜별 메뉴 목록 (기본: 오늘) | 로그인 사용자 |
//! | `GET` | `/menus/{id}` | 메뉴 단건 조회 | 로그인 사용자 |
//! | `GET` | `/menus/mis-menus` | 소속 카페테리아 메뉴 목록 | cafeteria |
//! | `PATCH` | `/menus/{id}/stock` | 재고 수동 조정 | cafeteria (소유자) |
//! | `DELETE` | `/menus/{id}` | 메뉴 삭제 | cafeteria (소유자) |
//! | `POST` | `/menus/{id}/reservar` | 현장 수령 예약 | student/office_user |
//! | `POST` | `/menus/{id}/prediccion-demanda` | LLM 수요 예측 | cafeteria/admin |

use actix_web::{delete, get, patch, post, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::checkout::ReservaResponse;
use crate::domain::dto::menus::{
    CreateMenuRequest, MenuResponse, ReservarRequest, UpdateStockRequest,
};
use crate::domain::entities::users::UserRole;
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::menus::{DemandService, MenuService};

/// 날짜별 목록 조회 쿼리
#[derive(Debug, Deserialize)]
pub struct ListarMenusQuery {
    /// "YYYY-MM-DD", 생략 시 오늘
    pub fecha: Option<String>,
    /// 캠퍼스 이름으로 필터 (선택)
    pub campus: Option<String>,
}

/// 메뉴 게시 핸들러
///
/// 일일 메뉴(`fecha`) 또는 반복 템플릿(`es_recurrente` + `dias_semana`)을
/// 생성합니다. 두 모드는 상호 배타이며 DTO 검증에서 강제됩니다.
/// 온보딩을 완료하지 않은 카페테리아는 409로 거부됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/menus`
///
/// # 요청 본문 (반복 템플릿)
///
/// ```json
/// {
///   "plato": "Paella de verduras",
///   "precio": 3.50,
///   "stock_total": 20,
///   "es_recurrente": true,
///   "dias_semana": ["lunes", "miercoles"],
///   "fecha_fin_recurrencia": "2026-12-31"
/// }
/// ```
#[post("")]
pub async fn create_menu(
    user: AuthenticatedUser,
    payload: web::Json<CreateMenuRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MenuService::instance();
    let menu = service.create_menu(&user, payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MenuResponse::from(menu)))
}

/// 날짜별 메뉴 목록 조회 핸들러
///
/// `?fecha=YYYY-MM-DD`를 생략하면 오늘 게시분을 반환하고, `?campus=`로
/// 캠퍼스를 좁힐 수 있습니다. 반복 템플릿 자체는 노출되지 않고 실체화된
/// 일일 메뉴만 나갑니다.
#[get("")]
pub async fn listar_menus(
    query: web::Query<ListarMenusQuery>,
) -> Result<HttpResponse, AppError> {
    let ListarMenusQuery { fecha, campus } = query.into_inner();

    let service = MenuService::instance();
    let menus = service.listar_por_fecha(fecha, campus).await?;

    let response: Vec<MenuResponse> = menus.into_iter().map(MenuResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// 소속 카페테리아 메뉴 목록 조회 핸들러 (템플릿 포함)
#[get("/mis-menus")]
pub async fn listar_mis_menus(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let cafeteria_id = user.cafeteria_id.as_deref().ok_or_else(|| {
        AppError::AuthorizationError("카페테리아 소속 계정이 아닙니다".to_string())
    })?;

    let service = MenuService::instance();
    let menus = service.listar_por_cafeteria(cafeteria_id).await?;

    let response: Vec<MenuResponse> = menus.into_iter().map(MenuResponse::from).collect();
    Ok(HttpResponse::Ok().json(response))
}

/// 메뉴 단건 조회 핸들러
#[get("/{menu_id}")]
pub async fn get_menu(menu_id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = MenuService::instance();
    let menu = service.get_menu(&menu_id).await?;

    Ok(HttpResponse::Ok().json(MenuResponse::from(menu)))
}

/// 재고 수동 조정 핸들러
///
/// 소유 카페테리아(또는 admin)만 호출할 수 있습니다. 조정 후 재고가
/// 임계값 이하면 재고 부족 팬아웃이 발동합니다.
#[patch("/{menu_id}/stock")]
pub async fn update_stock(
    user: AuthenticatedUser,
    menu_id: web::Path<String>,
    payload: web::Json<UpdateStockRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MenuService::instance();
    let menu = service
        .update_stock(&user, &menu_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MenuResponse::from(menu)))
}

/// 메뉴 삭제 핸들러
#[delete("/{menu_id}")]
pub async fn delete_menu(
    user: AuthenticatedUser,
    menu_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MenuService::instance();
    service.delete_menu(&user, &menu_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 현장 수령 예약 핸들러 (결제 프로바이더 없이)
///
/// 재고를 원자적으로 차감하고 `pending` 예약을 만듭니다.
/// 재고가 부족하면 409를 반환합니다.
#[post("/{menu_id}/reservar")]
pub async fn reservar(
    user: AuthenticatedUser,
    menu_id: web::Path<String>,
    payload: web::Json<ReservarRequest>,
) -> Result<HttpResponse, AppError> {
    if !user.has_any_role(&[UserRole::Student, UserRole::OfficeUser]) {
        return Err(AppError::AuthorizationError(
            "구매자 계정만 예약할 수 있습니다".to_string(),
        ));
    }

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MenuService::instance();
    let reserva = service
        .reservar(&user, &menu_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(ReservaResponse::from(reserva)))
}

/// LLM 수요 예측 핸들러
///
/// 카페테리아가 다음 게시 전 수량을 가늠할 때 사용하는 보조 기능입니다.
/// 예측 실패는 메뉴 게시를 막지 않습니다.
#[post("/{menu_id}/prediccion-demanda")]
pub async fn predecir_demanda(
    user: AuthenticatedUser,
    menu_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if !user.has_any_role(&[UserRole::Cafeteria, UserRole::Admin, UserRole::Manager]) {
        return Err(AppError::AuthorizationError(
            "카페테리아 또는 관리자 계정만 사용할 수 있습니다".to_string(),
        ));
    }

    let service = DemandService::instance();
    let estimate = service.predecir_demanda(&menu_id).await?;

    Ok(HttpResponse::Ok().json(estimate))
}
