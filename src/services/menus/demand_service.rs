//! 수요 예측 서비스 구현
//!
//! 외부 LLM 프로바이더에 메뉴 컨텍스트를 전달하여 예상 판매 수량과
//! 신뢰도를 받아옵니다. 예측은 참고용이며 재고에 자동 반영되지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::LlmConfig,
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::models::prediction::DemandEstimate,
    repositories::menus::MenuRepository,
    utils::time_utils,
};

/// LLM 프로바이더 응답 본문
#[derive(Debug, Deserialize)]
struct LlmPredictionResponse {
    demanda_estimada: i32,
    confianza: f64,
}

/// 수요 예측 서비스
pub struct DemandService {
    menu_repository: Arc<MenuRepository>,
}

impl DemandService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| DemandService {
            menu_repository: MenuRepository::instance(),
        })
    }

    /// 메뉴 수요 예측 요청
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 메뉴가 존재하지 않음
    /// * `AppError::ExternalServiceError` - LLM 프로바이더 통신 오류
    pub async fn predecir_demanda(&self, menu_id: &str) -> AppResult<DemandEstimate> {
        let menu = self
            .menu_repository
            .find_by_id(menu_id)
            .await?
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))?;

        let payload = json!({
            "model": LlmConfig::model(),
            "input": {
                "plato": menu.plato,
                "campus": menu.campus,
                "precio": menu.precio,
                "stock_total": menu.stock_total,
                "dia_semana": time_utils::hoy_dia_semana(),
            },
        });

        let client = reqwest::Client::new();

        let response = client
            .post(LlmConfig::api_url())
            .bearer_auth(LlmConfig::api_key())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("수요 예측 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "수요 예측 요청 실패: HTTP {}",
                response.status()
            )));
        }

        let prediction = response
            .json::<LlmPredictionResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("수요 예측 응답 파싱 실패: {}", e)))?;

        Ok(DemandEstimate::new(
            prediction.demanda_estimada,
            prediction.confianza,
        ))
    }
}

#[async_trait]
impl Service for DemandService {
    fn name(&self) -> &str {
        "demand_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn demand_service_construct() -> Arc<dyn Service> {
    DemandService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "demand_service",
        construct: demand_service_construct,
    }
}
