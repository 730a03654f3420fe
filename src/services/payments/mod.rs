//! 결제 서비스 모듈
//!
//! Stripe Checkout 세션 생성, 결제 확인, Connect 계정 발급을 담당합니다.
//!
//! # Security
//!
//! - 시크릿 키는 서버에서만 사용 (클라이언트 노출 금지)
//! - 결제 완료 판정은 항상 서버가 Stripe에 직접 조회하여 수행

pub mod checkout_service;

pub use checkout_service::*;
