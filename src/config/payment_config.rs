//! 결제 프로바이더(Stripe) 설정 관리 모듈
//!
//! Checkout 세션 생성과 Connect 계정 관리에 필요한 Stripe 설정을 제공합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export STRIPE_SECRET_KEY="sk_test_..."
//! export STRIPE_SUCCESS_URL="http://localhost:3000/checkout/success"
//! export STRIPE_CANCEL_URL="http://localhost:3000/checkout/cancel"
//! ```

use std::env;

/// Stripe API 설정
///
/// Checkout 세션, Connect 계정 등 Stripe REST API 호출에 필요한
/// 설정값들을 환경 변수에서 읽어 제공합니다.
pub struct StripeConfig;

impl StripeConfig {
    /// Stripe Secret Key를 반환합니다.
    ///
    /// 서버 사이드에서만 사용되는 민감한 정보입니다.
    /// 로그에 출력하거나 클라이언트에 노출해서는 안 됩니다.
    ///
    /// # Panics
    ///
    /// `STRIPE_SECRET_KEY` 환경 변수가 설정되지 않은 경우 패닉이 발생합니다.
    pub fn secret_key() -> String {
        env::var("STRIPE_SECRET_KEY")
            .expect("STRIPE_SECRET_KEY must be set")
    }

    /// Stripe API 기본 URL을 반환합니다.
    ///
    /// 테스트에서 목 서버로 교체할 수 있도록 환경 변수로 제어합니다.
    ///
    /// # 기본값
    ///
    /// `https://api.stripe.com`
    pub fn api_base() -> String {
        env::var("STRIPE_API_BASE")
            .unwrap_or_else(|_| "https://api.stripe.com".to_string())
    }

    /// 결제에 사용하는 통화 코드를 반환합니다.
    ///
    /// # 기본값
    ///
    /// `eur` (유럽 대학 캠퍼스 기준)
    pub fn currency() -> String {
        env::var("STRIPE_CURRENCY")
            .unwrap_or_else(|_| "eur".to_string())
    }

    /// 결제 성공 후 리디렉션될 URL을 반환합니다.
    ///
    /// Stripe가 `{CHECKOUT_SESSION_ID}` 플레이스홀더를 실제 세션 ID로
    /// 치환하므로, 클라이언트는 이 값으로 confirm 엔드포인트를 호출합니다.
    pub fn success_url() -> String {
        env::var("STRIPE_SUCCESS_URL")
            .unwrap_or_else(|_| {
                "http://localhost:3000/checkout/success?session_id={CHECKOUT_SESSION_ID}".to_string()
            })
    }

    /// 결제 취소 시 리디렉션될 URL을 반환합니다.
    pub fn cancel_url() -> String {
        env::var("STRIPE_CANCEL_URL")
            .unwrap_or_else(|_| "http://localhost:3000/checkout/cancel".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stripe_defaults() {
        if env::var("STRIPE_API_BASE").is_err() {
            assert_eq!(StripeConfig::api_base(), "https://api.stripe.com");
        }

        if env::var("STRIPE_CURRENCY").is_err() {
            assert_eq!(StripeConfig::currency(), "eur");
        }
    }
}
