//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 레지스트리로 싱글톤 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 메뉴/결제/온보딩/알림/인증 기능을 담당합니다.
//!
//! # Features
//!
//! - 메뉴 생명주기 관리 (생성, 예약, 반복 실체화)
//! - Stripe Checkout 기반 결제 플로우
//! - 카페테리아 온보딩 워크플로우
//! - 재고 부족/만료 임박 알림 팬아웃
//! - JWT 토큰 기반 인증 시스템
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{menus::MenuService, payments::CheckoutService};
//!
//! let menu_service = MenuService::instance();
//! let checkout_service = CheckoutService::instance();
//! ```

pub mod auth;
pub mod users;
pub mod menus;
pub mod notifications;
pub mod payments;
pub mod onboarding;
