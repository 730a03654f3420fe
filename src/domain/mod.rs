//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 로직과 도메인 규칙을 담당합니다.
//! Spring Framework의 Domain Layer와 동일한 역할을 수행하며,
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - 핵심 비즈니스 객체 (Menu, Reserva, User, Cafeteria...)
//! ├── DTOs          - 데이터 전송 객체 (Request/Response)
//! └── Models        - 외부 시스템 통합 및 내부 전달 모델 (인증, Stripe, LLM)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | `entities` 모듈 | 비즈니스 핵심 객체 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | Domain Models | `models` 모듈 | 외부 시스템 통합 |
//! | `@Valid` | `validator` 검증 | 데이터 유효성 검사 |
//!
//! ## 모듈 구성
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! MongoDB 컬렉션과 1:1 대응되는 영속 객체들입니다.
//! 반복 메뉴 매칭, 만료 윈도우 판정 같은 순수 도메인 로직을
//! 엔티티 메서드로 제공합니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//! `validator` derive로 입력 검증 규칙을 선언합니다.
//!
//! ```rust,ignore
//! #[derive(Debug, Deserialize, Validate)]
//! pub struct CreateMenuRequest {
//!     #[validate(length(min = 1, max = 100, message = "요리 이름은 1-100자 사이여야 합니다"))]
//!     pub plato: String,
//!
//!     #[validate(custom(function = "validate_dias_semana"))]
//!     pub dias_semana: Vec<String>,
//! }
//! ```
//!
//! ### [`models`] - 통합/전달 모델
//!
//! - **auth**: 인증 미들웨어가 추출하는 `AuthenticatedUser`, 역할 요구사항
//! - **token**: JWT 클레임과 토큰 쌍
//! - **payment**: Stripe API 응답 모델
//! - **prediction**: LLM 수요 예측 응답 모델
//!
//! ## 베스트 프랙티스
//!
//! 1. **작은 인터페이스**: 각 DTO는 특정 용도에만 최적화
//! 2. **명시적 변환**: From/Into trait을 통한 엔티티 → 응답 변환
//! 3. **순수 함수 우선**: 날짜/재고 판정 로직은 엔티티 메서드로 분리하여 테스트

// entities/dto가 같은 이름의 하위 모듈(menus, users)을 갖고 있어
// 상위 glob re-export는 두지 않습니다. 전체 경로로 가져다 씁니다.
pub mod entities;
pub mod dto;
pub mod models;
