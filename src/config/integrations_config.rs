//! 외부 통합(이메일, LLM) 설정 관리 모듈
//!
//! 이메일 발송 API와 수요 예측용 LLM API 호출에 필요한 설정을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export EMAIL_API_KEY="your-email-api-key"
//! export LLM_API_KEY="your-llm-api-key"
//! ```

use std::env;

/// 이메일 발송 API 설정
///
/// 만료 알림, 재고 알림, 온보딩 인증 메일 발송에 사용됩니다.
pub struct EmailConfig;

impl EmailConfig {
    /// 이메일 API 엔드포인트 URL을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `https://api.emaildelivery.example/v1/send`
    pub fn api_url() -> String {
        env::var("EMAIL_API_URL")
            .unwrap_or_else(|_| "https://api.emaildelivery.example/v1/send".to_string())
    }

    /// 이메일 API 인증 키를 반환합니다.
    ///
    /// # Panics
    ///
    /// `EMAIL_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("EMAIL_API_KEY")
            .expect("EMAIL_API_KEY must be set")
    }

    /// 발신자 주소를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `noreply@platpal.app`
    pub fn from_address() -> String {
        env::var("EMAIL_FROM_ADDRESS")
            .unwrap_or_else(|_| "noreply@platpal.app".to_string())
    }
}

/// 수요 예측 LLM API 설정
pub struct LlmConfig;

impl LlmConfig {
    /// LLM API 엔드포인트 URL을 반환합니다.
    pub fn api_url() -> String {
        env::var("LLM_API_URL")
            .unwrap_or_else(|_| "https://api.llmprovider.example/v1/invoke".to_string())
    }

    /// LLM API 인증 키를 반환합니다.
    ///
    /// # Panics
    ///
    /// `LLM_API_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn api_key() -> String {
        env::var("LLM_API_KEY")
            .expect("LLM_API_KEY must be set")
    }

    /// 사용할 모델 이름을 반환합니다.
    ///
    /// # 기본값
    ///
    /// `demand-forecast-small`
    pub fn model() -> String {
        env::var("LLM_MODEL")
            .unwrap_or_else(|_| "demand-forecast-small".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_defaults() {
        if env::var("EMAIL_FROM_ADDRESS").is_err() {
            assert_eq!(EmailConfig::from_address(), "noreply@platpal.app");
        }
    }

    #[test]
    fn test_llm_defaults() {
        if env::var("LLM_MODEL").is_err() {
            assert_eq!(LlmConfig::model(), "demand-forecast-small");
        }
    }
}
