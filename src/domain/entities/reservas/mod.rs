//! Reservas Entity Module
//!
//! 구매/예약 기록 엔티티를 정의하는 모듈입니다.
//! 사용자-메뉴-결제 세션을 연결하고 결제 상태 전이를 추적합니다.

pub mod reserva;

pub use reserva::*;
