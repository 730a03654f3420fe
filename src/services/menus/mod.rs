//! 메뉴 도메인 서비스 모듈
//!
//! 메뉴 생명주기, 반복 메뉴 실체화/만료 알림, LLM 기반 수요 예측을
//! 담당하는 서비스들을 제공합니다.
//!
//! # Features
//!
//! - 메뉴 CRUD 및 원자적 재고 예약
//! - 반복 템플릿의 멱등 실체화 (스케줄러/관리자 트리거)
//! - 만료 임박 반복 메뉴 알림 (at-most-once)
//! - 메뉴별 수요 예측

pub mod menu_service;
pub mod recurrence_service;
pub mod demand_service;

pub use menu_service::*;
pub use recurrence_service::*;
pub use demand_service::*;
