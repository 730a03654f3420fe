//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//! 학생/오피스/카페테리아/관리자 역할과 알림 수신 설정을 포함합니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **역할(rol)**: student / office_user / cafeteria / admin / manager
//! - **알림 설정**: 재고 부족, 반복 메뉴 만료 임박 알림 opt-in/out
//! - **카페테리아 연결**: cafeteria 역할 계정은 `cafeteria_id`로 소속 연결
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserRole};
//!
//! let user = User::new(
//!     "ana@uni.example".to_string(),
//!     "Ana García".to_string(),
//!     hashed_password,
//!     UserRole::Student,
//! );
//! ```

pub mod user;

pub use user::*;
