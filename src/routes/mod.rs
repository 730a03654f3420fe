//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 메뉴, 예약/결제, 온보딩, 알림, 관리자 잡 트리거와 헬스체크 엔드포인트를
//! 포함합니다.
//!
//! # Features
//!
//! - 메뉴 게시/조회/예약 API 엔드포인트
//! - Stripe Checkout API 엔드포인트
//! - 카페테리아 온보딩 워크플로우 엔드포인트
//! - 역할 기반 접근 제어 미들웨어 적용
//! - 헬스체크 엔드포인트
//!
//! # Auth Middleware Usage
//!
//! 라우트에 따라 다른 인증 레벨을 적용합니다:
//!
//! ## 인증 불필요 (Public 라우트)
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/auth")
//!         .service(handlers::auth::login)     // 로그인 자체는 인증 불필요
//!         .service(handlers::auth::register)  // 회원가입도 인증 불필요
//! );
//! ```
//!
//! ## 인증 필요 + 역할 기반 권한 검증
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/admin")
//!         .wrap(AuthMiddleware::required_with_roles(vec![UserRole::Admin, UserRole::Manager]))
//!         .service(handlers::admin::trigger_materializacion)
//! );
//! ```
//!
//! 하나의 스코프에 public/protected 라우트가 섞이는 온보딩은
//! `AuthMiddleware::optional()`을 적용하고 핸들러의 `AuthenticatedUser`
//! extractor와 역할 검사로 개별 보호합니다.

use crate::domain::entities::users::UserRole;
use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_auth_routes(cfg);
    configure_user_routes(cfg);
    configure_menu_routes(cfg);
    configure_checkout_routes(cfg);
    configure_onboarding_routes(cfg);
    configure_notification_routes(cfg);
    configure_admin_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// 회원가입과 로그인은 인증을 얻기 위한 엔드포인트이므로 Public입니다.
///
/// # Available Routes
///
/// - `POST /api/v1/auth/register` - 구매자 계정 생성
/// - `POST /api/v1/auth/login` - 이메일/비밀번호 로그인
/// - `POST /api/v1/auth/verify` - JWT 토큰 검증
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::verify_token),
    );
}

/// 사용자 본인 정보 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/me` - 내 정보 조회
/// - `PATCH /api/v1/me/preferencias` - 알림 수신 설정 변경
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/me")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::get_me)
            .service(handlers::users::update_preferencias),
    );
}

/// 메뉴 관련 라우트를 설정합니다
///
/// 모든 메뉴 라우트는 로그인이 필요합니다. 게시/조정/삭제의 소유권과
/// 역할 검증은 서비스/핸들러 계층에서 수행합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/menus` - 메뉴 게시 (cafeteria)
/// - `GET /api/v1/menus?fecha=` - 날짜별 목록 (기본: 오늘)
/// - `GET /api/v1/menus/mis-menus` - 소속 카페테리아 목록 (템플릿 포함)
/// - `GET /api/v1/menus/{id}` - 단건 조회
/// - `PATCH /api/v1/menus/{id}/stock` - 재고 조정 (소유자)
/// - `DELETE /api/v1/menus/{id}` - 삭제 (소유자)
/// - `POST /api/v1/menus/{id}/reservar` - 현장 수령 예약 (구매자)
/// - `POST /api/v1/menus/{id}/prediccion-demanda` - 수요 예측 (cafeteria/admin)
fn configure_menu_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/menus")
            .wrap(AuthMiddleware::required())
            .service(handlers::menus::create_menu)
            .service(handlers::menus::listar_menus)
            // 고정 경로를 "{menu_id}"보다 먼저 등록
            .service(handlers::menus::listar_mis_menus)
            .service(handlers::menus::get_menu)
            .service(handlers::menus::update_stock)
            .service(handlers::menus::delete_menu)
            .service(handlers::menus::reservar)
            .service(handlers::menus::predecir_demanda),
    );
}

/// 결제 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/checkout/session` - Checkout 세션 생성
/// - `POST /api/v1/checkout/subscription` - 구독 세션 생성
/// - `POST /api/v1/checkout/connect-account` - Connect 연결 계정 생성 (admin)
/// - `POST /api/v1/checkout/confirmar` - 결제 확인 (서버 검증)
fn configure_checkout_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/checkout")
            .wrap(AuthMiddleware::required())
            .service(handlers::checkout::create_session)
            .service(handlers::checkout::create_subscription)
            .service(handlers::checkout::create_connect_account)
            .service(handlers::checkout::confirmar),
    );
}

/// 온보딩 관련 라우트를 설정합니다
///
/// 등록/이메일 확인/추천 코드 조회는 Public, 나머지는 핸들러 계층에서
/// `AuthenticatedUser` extractor와 역할 검사로 보호합니다.
fn configure_onboarding_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/onboarding")
            .wrap(AuthMiddleware::optional())
            .service(handlers::onboarding::registrar)
            .service(handlers::onboarding::confirmar_email)
            .service(handlers::onboarding::validar_referido)
            .service(handlers::onboarding::subir_documento)
            .service(handlers::onboarding::aprobar_kyc)
            .service(handlers::onboarding::generar_contrato)
            .service(handlers::onboarding::rechazar)
            .service(handlers::onboarding::get_cafeteria),
    );
}

/// 알림 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /api/v1/notificaciones?limit=` - 내 알림 목록 (최신순)
/// - `POST /api/v1/notificaciones/{id}/leida` - 읽음 처리
fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notificaciones")
            .wrap(AuthMiddleware::required())
            .service(handlers::notifications::listar)
            .service(handlers::notifications::marcar_leida),
    );
}

/// 관리자 전용 라우트를 설정합니다
///
/// 스케줄러가 도는 백그라운드 잡을 수동으로 트리거할 수 있습니다.
fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/admin")
            .wrap(AuthMiddleware::required_with_roles(vec![
                UserRole::Admin,
                UserRole::Manager,
            ]))
            .service(handlers::admin::trigger_materializacion)
            .service(handlers::admin::trigger_expiraciones)
            .service(handlers::admin::trigger_stock_bajo),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "platpal_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-08-28T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "payments": "Stripe Checkout"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "platpal_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "payments": "Stripe Checkout"
        }
    }))
}
