//! # Cafeteria Onboarding HTTP Handlers
//!
//! 카페테리아 등록부터 계약 생성까지의 온보딩 워크플로우 엔드포인트입니다.
//! 상태 머신의 허용 전이는 서비스 계층에서 강제되며, 건너뛰기와 역행은
//! 409로 거부됩니다.
//!
//! | 메서드 | 경로 | 설명 | 권한 |
//! |--------|------|------|------|
//! | `POST` | `/onboarding/cafeterias` | 카페테리아 등록 | public |
//! | `POST` | `/onboarding/cafeterias/confirmar-email` | 이메일 토큰 확인 | public |
//! | `GET` | `/onboarding/referido/{codigo}` | 추천 코드 실적 조회 | public |
//! | `GET` | `/onboarding/cafeterias/{id}` | 온보딩 상태 조회 | cafeteria/admin |
//! | `POST` | `/onboarding/cafeterias/{id}/documentos` | KYC 문서 업로드 | cafeteria (본인) |
//! | `POST` | `/onboarding/cafeterias/{id}/kyc/aprobar` | KYC 승인 | admin |
//! | `POST` | `/onboarding/cafeterias/{id}/contrato` | 계약 생성 + Connect 계정 | admin |
//! | `POST` | `/onboarding/cafeterias/{id}/rechazar` | 온보딩 거절 | admin |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::onboarding::{
    CafeteriaResponse, ConfirmarEmailRequest, DocumentoResponse, RechazarRequest,
    RegistrarCafeteriaRequest, SubirDocumentoRequest,
};
use crate::domain::models::auth::{AuthenticatedUser, OptionalUser};
use crate::services::onboarding::OnboardingService;

/// 본인 카페테리아이거나 admin인지 확인
fn verificar_acceso(user: &AuthenticatedUser, cafeteria_id: &str) -> Result<(), AppError> {
    if user.is_admin() || user.cafeteria_id.as_deref() == Some(cafeteria_id) {
        return Ok(());
    }

    Err(AppError::AuthorizationError(
        "해당 카페테리아에 대한 권한이 없습니다".to_string(),
    ))
}

/// admin/manager 역할 확인
fn verificar_admin(user: &AuthenticatedUser) -> Result<(), AppError> {
    if user.is_admin() {
        return Ok(());
    }

    Err(AppError::AuthorizationError(
        "관리자 권한이 필요합니다".to_string(),
    ))
}

/// 카페테리아 등록 핸들러
///
/// 온보딩의 시작점입니다. 등록 즉시 확인 토큰이 담긴 이메일이 발송되며
/// 카페테리아는 `registrada` 상태로 생성됩니다.
///
/// # 엔드포인트
///
/// `POST /api/v1/onboarding/cafeterias`
///
/// # 요청 본문
///
/// ```json
/// {
///   "nombre": "Cafetería Central",
///   "campus": "Campus Norte",
///   "email_contacto": "central@uni.example",
///   "codigo_referido": "REF-2026"
/// }
/// ```
#[post("/cafeterias")]
pub async fn registrar(
    payload: web::Json<RegistrarCafeteriaRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = OnboardingService::instance();
    let cafeteria = service.registrar(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(CafeteriaResponse::from(cafeteria)))
}

/// 이메일 확인 핸들러 (registrada → email_verificado)
///
/// 토큰은 24시간 TTL의 1회용이며, 만료/미존재는 400으로 응답합니다.
#[post("/cafeterias/confirmar-email")]
pub async fn confirmar_email(
    payload: web::Json<ConfirmarEmailRequest>,
) -> Result<HttpResponse, AppError> {
    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = OnboardingService::instance();
    let cafeteria = service.confirmar_email(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CafeteriaResponse::from(cafeteria)))
}

/// 온보딩 상태 조회 핸들러
#[get("/cafeterias/{cafeteria_id}")]
pub async fn get_cafeteria(
    user: OptionalUser,
    cafeteria_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = user.required()?;
    verificar_acceso(&user, &cafeteria_id)?;

    let service = OnboardingService::instance();
    let cafeteria = service.get_cafeteria(&cafeteria_id).await?;

    Ok(HttpResponse::Ok().json(CafeteriaResponse::from(cafeteria)))
}

/// KYC 문서 업로드 핸들러
///
/// pdf/jpeg/png, 10MB 이하만 허용합니다. 첫 문서 업로드 시
/// `documentos_subidos`로 전이합니다.
#[post("/cafeterias/{cafeteria_id}/documentos")]
pub async fn subir_documento(
    user: OptionalUser,
    cafeteria_id: web::Path<String>,
    payload: web::Json<SubirDocumentoRequest>,
) -> Result<HttpResponse, AppError> {
    let user = user.required()?;
    verificar_acceso(&user, &cafeteria_id)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = OnboardingService::instance();
    let documento = service
        .subir_documento(&cafeteria_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(DocumentoResponse::from(documento)))
}

/// KYC 승인 핸들러 (admin 전용)
#[post("/cafeterias/{cafeteria_id}/kyc/aprobar")]
pub async fn aprobar_kyc(
    user: OptionalUser,
    cafeteria_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    verificar_admin(&user.required()?)?;

    let service = OnboardingService::instance();
    let cafeteria = service.aprobar_kyc(&cafeteria_id).await?;

    Ok(HttpResponse::Ok().json(CafeteriaResponse::from(cafeteria)))
}

/// 계약 생성 핸들러 (admin 전용)
///
/// `contrato_generado`로 전이하고 Stripe Connect 연결 계정을 발급합니다.
/// 이 시점부터 해당 카페테리아는 메뉴를 게시할 수 있습니다.
#[post("/cafeterias/{cafeteria_id}/contrato")]
pub async fn generar_contrato(
    user: OptionalUser,
    cafeteria_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    verificar_admin(&user.required()?)?;

    let service = OnboardingService::instance();
    let cafeteria = service.generar_contrato(&cafeteria_id).await?;

    Ok(HttpResponse::Ok().json(CafeteriaResponse::from(cafeteria)))
}

/// 온보딩 거절 핸들러 (admin 전용, terminal)
#[post("/cafeterias/{cafeteria_id}/rechazar")]
pub async fn rechazar(
    user: OptionalUser,
    cafeteria_id: web::Path<String>,
    payload: web::Json<RechazarRequest>,
) -> Result<HttpResponse, AppError> {
    verificar_admin(&user.required()?)?;

    payload
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = OnboardingService::instance();
    let cafeteria = service.rechazar(&cafeteria_id, &payload.motivo).await?;

    Ok(HttpResponse::Ok().json(CafeteriaResponse::from(cafeteria)))
}

/// 추천 코드 실적 조회 핸들러
///
/// 해당 코드로 등록된 카페테리아 수를 반환합니다.
#[get("/referido/{codigo}")]
pub async fn validar_referido(codigo: web::Path<String>) -> Result<HttpResponse, AppError> {
    let service = OnboardingService::instance();
    let response = service.validar_referido(&codigo).await?;

    Ok(HttpResponse::Ok().json(response))
}
