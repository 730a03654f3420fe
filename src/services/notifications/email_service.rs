//! 이메일 발송 서비스 구현
//!
//! 외부 이메일 전송 API의 얇은 클라이언트입니다. 온보딩 확인 메일과
//! 만료 임박 알림 메일이 이 서비스를 경유합니다.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    config::EmailConfig,
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
};

/// 이메일 발송 서비스
pub struct EmailService {
    // 외부 의존성 없음
}

impl EmailService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| EmailService {})
    }

    /// 이메일 한 통 발송
    ///
    /// # Errors
    ///
    /// * `AppError::ExternalServiceError` - 전송 API 통신 오류
    pub async fn send(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let payload = json!({
            "from": EmailConfig::from_address(),
            "to": to,
            "subject": subject,
            "body": body,
        });

        let client = reqwest::Client::new();

        let response = client
            .post(EmailConfig::api_url())
            .bearer_auth(EmailConfig::api_key())
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("이메일 전송 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "이메일 전송 실패: HTTP {}",
                response.status()
            )));
        }

        log::info!("📧 이메일 발송 완료: to={} subject={}", to, subject);

        Ok(())
    }
}

#[async_trait]
impl Service for EmailService {
    fn name(&self) -> &str {
        "email_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn email_service_construct() -> Arc<dyn Service> {
    EmailService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "email_service",
        construct: email_service_construct,
    }
}
