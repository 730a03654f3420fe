//! Notificaciones Entity Module
//!
//! 인앱 알림 기록 엔티티를 정의하는 모듈입니다.
//! 재고 부족 팬아웃, 반복 메뉴 만료 임박, 온보딩 진행 알림을 저장합니다.

pub mod notificacion;

pub use notificacion::*;
