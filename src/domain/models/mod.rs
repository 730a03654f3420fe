//! # Domain Models Module
//!
//! 도메인의 비즈니스 모델과 값 객체(Value Objects)를 정의하는 모듈입니다.
//! entities와는 구별되는 역할을 담당합니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 데이터베이스에 직접 저장되는 객체
//! - **정체성**: 고유한 식별자(ID)를 가짐
//! - **예시**: `Menu`, `Reserva`, `User`, `Cafeteria`
//!
//! ### Models (`./`)
//! - **비즈니스 로직**: 요청 컨텍스트와 외부 시스템 통합 모델
//! - **값 객체**: 식별자보다는 값 자체가 중요
//! - **예시**: `AuthenticatedUser`, `TokenClaims`, `StripeSession`, `DemandEstimate`
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | Rust Domain Models |
//! |--------|-------------------|
//! | `@Entity` | `../entities/` |
//! | `@Embeddable` | `./` (값 객체) |
//! | `SecurityContextHolder` | `AuthenticatedUser` extractor |
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/         ← 인증된 요청 컨텍스트 (extractor)
//! ├── token/        ← JWT 클레임과 토큰 쌍
//! ├── payment/      ← Stripe API 응답 모델
//! └── prediction/   ← 수요 예측 결과 모델
//! ```

pub mod auth;
pub mod token;
pub mod payment;
pub mod prediction;

pub use auth::*;
pub use token::*;
pub use payment::*;
pub use prediction::*;
