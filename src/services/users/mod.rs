//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 사용자 등록 및 검증
//! - 비밀번호 해싱 및 인증 (bcrypt)
//! - 알림 수신 설정 관리

pub mod user_service;

pub use user_service::*;
