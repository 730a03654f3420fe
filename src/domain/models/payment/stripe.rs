//! Stripe API 응답 모델

use serde::{Deserialize, Serialize};

/// Checkout Session 응답
///
/// 세션 생성과 결제 확인 조회 양쪽에서 사용합니다. 결제 확인은
/// `payment_status == "paid"`를 서버가 직접 확인한 경우에만 성립합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeSession {
    /// 세션 ID (예: "cs_test_...")
    pub id: String,
    /// 클라이언트를 리다이렉트할 결제 페이지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 결제 상태: "paid" / "unpaid" / "no_payment_required"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
    /// 세션 상태: "open" / "complete" / "expired"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl StripeSession {
    /// 결제가 실제로 완료되었는지 확인
    pub fn is_paid(&self) -> bool {
        self.payment_status.as_deref() == Some("paid")
    }
}

/// Connect 연결 계정 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeAccount {
    /// 계정 ID (예: "acct_...")
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_paid_only_for_paid_status() {
        let session: StripeSession = serde_json::from_str(
            r#"{"id": "cs_test_1", "payment_status": "paid", "status": "complete"}"#,
        )
        .unwrap();
        assert!(session.is_paid());

        let unpaid: StripeSession = serde_json::from_str(
            r#"{"id": "cs_test_2", "payment_status": "unpaid", "status": "open"}"#,
        )
        .unwrap();
        assert!(!unpaid.is_paid());

        // payment_status 누락 시에도 미결제 취급
        let sin_estado: StripeSession = serde_json::from_str(r#"{"id": "cs_test_3"}"#).unwrap();
        assert!(!sin_estado.is_paid());
    }
}
