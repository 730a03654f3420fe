//! 결제 프로바이더(Stripe) 응답 모델
//!
//! Stripe REST API 응답 중 우리가 사용하는 필드만 역직렬화합니다.

pub mod stripe;

pub use stripe::*;
