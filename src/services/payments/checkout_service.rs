//! Stripe Checkout 프록시 서비스 구현
//!
//! Stripe REST API와 form-encoded로 통신하는 결제 플로우를 담당합니다.
//!
//! ## 핵심 규칙
//!
//! - `precio_total`이 없으면 Stripe 호출 없이 즉시 400을 반환합니다.
//! - 금액은 센트 단위 정수(`unit_amount`)로 변환합니다 (2.99 EUR → 299).
//! - 결제 완료는 클라이언트 주장이 아니라 서버가 세션을 직접 조회하여
//!   `payment_status == "paid"`를 확인한 경우에만 인정합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::StripeConfig,
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::dto::checkout::{
        CheckoutSessionResponse, ConfirmacionResponse, ConfirmarPagoRequest, ConnectAccountResponse,
        CreateCheckoutRequest, CreateSubscriptionRequest,
    },
    domain::entities::menus::Menu,
    domain::entities::reservas::{EstadoReserva, Reserva},
    domain::models::auth::AuthenticatedUser,
    domain::models::payment::{StripeAccount, StripeSession},
    repositories::{
        cafeterias::CafeteriaRepository, menus::MenuRepository, reservas::ReservaRepository,
    },
};

/// Stripe Checkout 프록시 서비스
pub struct CheckoutService {
    menu_repository: Arc<MenuRepository>,
    reserva_repository: Arc<ReservaRepository>,
    cafeteria_repository: Arc<CafeteriaRepository>,
}

impl CheckoutService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| CheckoutService {
            menu_repository: MenuRepository::instance(),
            reserva_repository: ReservaRepository::instance(),
            cafeteria_repository: CafeteriaRepository::instance(),
        })
    }

    /// EUR 금액을 Stripe 센트 단위 정수로 변환
    ///
    /// 부동소수점 오차를 피하기 위해 반올림 후 변환합니다 (2.99 → 299).
    fn to_unit_amount(precio: f64) -> i64 {
        (precio * 100.0).round() as i64
    }

    /// Checkout 세션 생성용 form 파라미터 구성
    fn build_session_params(
        menu: &Menu,
        cantidad: i32,
        precio_total: f64,
        descripcion: Option<&str>,
    ) -> Vec<(String, String)> {
        let nombre_producto = match descripcion {
            Some(desc) => format!("{} - {}", menu.plato, desc),
            None => menu.plato.clone(),
        };

        // 총액을 단일 line item으로 전달 (수량은 메타 정보)
        vec![
            ("mode".to_string(), "payment".to_string()),
            ("success_url".to_string(), StripeConfig::success_url()),
            ("cancel_url".to_string(), StripeConfig::cancel_url()),
            (
                "line_items[0][price_data][currency]".to_string(),
                StripeConfig::currency(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                nombre_producto,
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                Self::to_unit_amount(precio_total).to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("metadata[cantidad]".to_string(), cantidad.to_string()),
        ]
    }

    async fn post_form(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> AppResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let url = format!("{}{}", StripeConfig::api_base(), path);

        let response = client
            .post(&url)
            .bearer_auth(StripeConfig::secret_key())
            .form(params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Stripe 요청 실패: HTTP {}",
                response.status()
            )));
        }

        Ok(response)
    }

    /// 단건 결제 Checkout 세션 생성
    ///
    /// 재고는 세션 생성 시점에 원자적으로 차감(선점)되며, Stripe 호출이
    /// 실패하면 되돌립니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `precio_total` 누락 (Stripe 호출 전)
    /// * `AppError::NotFound` - 메뉴 없음
    /// * `AppError::ConflictError` - 재고 부족
    pub async fn create_session(
        &self,
        user: &AuthenticatedUser,
        request: CreateCheckoutRequest,
    ) -> AppResult<CheckoutSessionResponse> {
        // 프로바이더 호출 전에 필수 필드부터 검증
        let precio_total = request
            .precio_total
            .ok_or_else(|| AppError::ValidationError("precio_total이 필요합니다".to_string()))?;

        if precio_total <= 0.0 || !precio_total.is_finite() {
            return Err(AppError::ValidationError(
                "precio_total은 0보다 커야 합니다".to_string(),
            ));
        }

        let user_oid = mongodb::bson::oid::ObjectId::parse_str(&user.user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        // 재고 선점
        let menu = self
            .menu_repository
            .decrementar_stock(&request.menu_id, request.cantidad)
            .await?
            .ok_or_else(|| AppError::ConflictError("재고가 부족합니다".to_string()))?;

        let params = Self::build_session_params(
            &menu,
            request.cantidad,
            precio_total,
            request.descripcion.as_deref(),
        );

        let session = match self.post_form("/v1/checkout/sessions", &params).await {
            Ok(response) => response
                .json::<StripeSession>()
                .await
                .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e))),
            Err(e) => Err(e),
        };

        let session = match session {
            Ok(session) => session,
            Err(e) => {
                // 세션 생성 실패 시 선점한 재고 반환
                self.reponer_stock(&request.menu_id, request.cantidad).await;
                return Err(e);
            }
        };

        let menu_oid = menu
            .id
            .ok_or_else(|| AppError::InternalError("메뉴 ID가 없습니다".to_string()))?;

        let reserva = Reserva::new_pendiente(
            user_oid,
            menu_oid,
            request.cantidad,
            precio_total,
            Some(session.id.clone()),
        );
        self.reserva_repository.create(reserva).await?;

        Ok(CheckoutSessionResponse {
            session_id: session.id,
            url: session.url,
        })
    }

    /// 구독(식권 플랜) Checkout 세션 생성
    ///
    /// 월 단위 반복 결제이며 가격은 인라인 price_data로 전달합니다.
    pub async fn create_subscription_session(
        &self,
        request: CreateSubscriptionRequest,
    ) -> AppResult<CheckoutSessionResponse> {
        if request.precio_mensual <= 0.0 || !request.precio_mensual.is_finite() {
            return Err(AppError::ValidationError(
                "precio_mensual은 0보다 커야 합니다".to_string(),
            ));
        }

        let params = vec![
            ("mode".to_string(), "subscription".to_string()),
            ("success_url".to_string(), StripeConfig::success_url()),
            ("cancel_url".to_string(), StripeConfig::cancel_url()),
            (
                "line_items[0][price_data][currency]".to_string(),
                StripeConfig::currency(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                request.nombre,
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                Self::to_unit_amount(request.precio_mensual).to_string(),
            ),
            (
                "line_items[0][price_data][recurring][interval]".to_string(),
                "month".to_string(),
            ),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
        ];

        let session = self
            .post_form("/v1/checkout/sessions", &params)
            .await?
            .json::<StripeSession>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))?;

        Ok(CheckoutSessionResponse {
            session_id: session.id,
            url: session.url,
        })
    }

    /// 결제 확인 (서버 측 검증)
    ///
    /// Stripe에서 세션을 직접 조회하여 `payment_status == "paid"`인
    /// 경우에만 예약을 `pagado`로 전이시킵니다. 이미 전이된 예약에 대한
    /// 중복 확인 요청은 현재 상태를 그대로 반환합니다 (멱등).
    pub async fn confirmar(
        &self,
        request: ConfirmarPagoRequest,
    ) -> AppResult<ConfirmacionResponse> {
        let client = reqwest::Client::new();
        let url = format!(
            "{}/v1/checkout/sessions/{}",
            StripeConfig::api_base(),
            urlencoding::encode(&request.session_id)
        );

        let response = client
            .get(&url)
            .bearer_auth(StripeConfig::secret_key())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 세션 조회 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Stripe 세션 조회 실패: HTTP {}",
                response.status()
            )));
        }

        let session = response
            .json::<StripeSession>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))?;

        if !session.is_paid() {
            return Err(AppError::ConflictError(
                "결제가 완료되지 않았습니다".to_string(),
            ));
        }

        // pending → pagado 조건부 전이. 이미 전이된 경우 기존 예약 조회.
        let reserva = match self.reserva_repository.mark_pagado(&request.session_id).await? {
            Some(reserva) => reserva,
            None => self
                .reserva_repository
                .find_by_session_id(&request.session_id)
                .await?
                .filter(|r| r.estado == EstadoReserva::Pagado)
                .ok_or_else(|| AppError::NotFound("예약을 찾을 수 없습니다".to_string()))?,
        };

        Ok(ConfirmacionResponse {
            reserva_id: reserva.id_string().unwrap_or_default(),
            estado: "pagado".to_string(),
        })
    }

    /// 카페테리아용 Stripe Connect 연결 계정 생성
    ///
    /// 온보딩 계약 생성 단계에서 호출됩니다.
    pub async fn create_connect_account(
        &self,
        cafeteria_id: &str,
    ) -> AppResult<ConnectAccountResponse> {
        let params = vec![("type".to_string(), "express".to_string())];

        let account = self
            .post_form("/v1/accounts", &params)
            .await?
            .json::<StripeAccount>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Stripe 응답 파싱 실패: {}", e)))?;

        self.cafeteria_repository
            .set_stripe_account(cafeteria_id, &account.id)
            .await?;

        Ok(ConnectAccountResponse {
            account_id: account.id,
        })
    }

    /// 실패한 세션 생성의 재고 선점 롤백
    async fn reponer_stock(&self, menu_id: &str, cantidad: i32) {
        // 음수 차감으로 재고 반환
        if let Err(e) = self.menu_repository.decrementar_stock(menu_id, -cantidad).await {
            log::error!("재고 반환 실패 (menu={}): {}", menu_id, e);
        }
    }
}

#[async_trait]
impl Service for CheckoutService {
    fn name(&self) -> &str {
        "checkout_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn checkout_service_construct() -> Arc<dyn Service> {
    CheckoutService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "checkout_service",
        construct: checkout_service_construct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn menu() -> Menu {
        Menu::new_diario(
            ObjectId::new(),
            "Cafetería Central".to_string(),
            "Campus Norte".to_string(),
            "Paella de verduras".to_string(),
            2.99,
            10,
            "2026-08-28".to_string(),
        )
    }

    #[test]
    fn test_to_unit_amount_cents() {
        assert_eq!(CheckoutService::to_unit_amount(2.99), 299);
        assert_eq!(CheckoutService::to_unit_amount(3.50), 350);
        assert_eq!(CheckoutService::to_unit_amount(10.0), 1000);
        // 부동소수점 표현 오차에도 반올림으로 안정적
        assert_eq!(CheckoutService::to_unit_amount(0.1 + 0.2), 30);
    }

    #[test]
    fn test_build_session_params_unit_amount() {
        let params = CheckoutService::build_session_params(&menu(), 1, 2.99, None);

        let unit_amount = params
            .iter()
            .find(|(k, _)| k == "line_items[0][price_data][unit_amount]")
            .map(|(_, v)| v.as_str());

        assert_eq!(unit_amount, Some("299"));
    }

    #[test]
    fn test_build_session_params_mode_and_product() {
        let params = CheckoutService::build_session_params(&menu(), 2, 5.98, Some("para llevar"));

        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
        };

        assert_eq!(get("mode"), Some("payment"));
        assert_eq!(get("metadata[cantidad]"), Some("2"));
        assert_eq!(
            get("line_items[0][price_data][product_data][name]"),
            Some("Paella de verduras - para llevar")
        );
    }
}
