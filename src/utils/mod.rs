//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 날짜/요일 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`time_utils`] - 날짜 포맷, 스페인어 요일 이름, 날짜 간격 계산
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::time_utils::{hoy_fecha, weekday_es};
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let fecha = hoy_fecha();                  // "2026-08-28"
//! let dia = weekday_es(chrono::Weekday::Mon); // "lunes"
//!
//! print_boxed_title("System Initialized");
//! ```

pub mod time_utils;
pub mod display_terminal;
