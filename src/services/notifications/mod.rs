//! 알림 서비스 모듈
//!
//! 인앱 알림 팬아웃과 트랜잭셔널 이메일 발송을 담당하는 서비스들을
//! 제공합니다.
//!
//! # Features
//!
//! - 재고 부족 알림 팬아웃 (opt-in 구매자 대상)
//! - 반복 메뉴 만료 임박 알림 (카페테리아 계정 대상, 이메일 포함)
//! - 이메일 전송 API 클라이언트

pub mod notification_service;
pub mod email_service;

pub use notification_service::*;
pub use email_service::*;
