//! Menus Entity Module
//!
//! 메뉴 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 일일 메뉴와 반복 메뉴 템플릿을 하나의 `Menu` 엔티티로 표현합니다.
//!
//! # 주요 구성 요소
//!
//! ### Menu Entity
//! - **일일 메뉴**: `fecha`가 설정된 특정 날짜의 판매 메뉴
//! - **반복 템플릿**: `es_recurrente=true`이고 `fecha`가 없는 템플릿.
//!   매일 스케줄러가 요일 매칭 후 오늘 날짜 사본을 생성(실체화)합니다
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::menus::Menu;
//!
//! let plantilla = Menu::new_recurrente(
//!     cafeteria_id,
//!     "Cafetería Central".to_string(),
//!     "Campus Norte".to_string(),
//!     "Paella de verduras".to_string(),
//!     3.50,
//!     20,
//!     vec!["lunes".to_string(), "miercoles".to_string()],
//!     Some("2026-12-31".to_string()),
//! );
//!
//! if plantilla.aplica_hoy("lunes") {
//!     let copia = plantilla.materializar("2026-08-31");
//! }
//! ```

pub mod menu;

pub use menu::*;
