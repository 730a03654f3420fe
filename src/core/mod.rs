//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//! Spring Framework의 핵심 컨테이너 기능을 Rust 생태계에 맞게 구현하여,
//! 타입 안전성과 성능을 모두 만족하는 의존성 주입 시스템을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: Spring의 ApplicationContext + BeanFactory 역할
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 컴포넌트 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프레임워크 |
//! |--------|---------------|
//! | `ApplicationContext` | `ServiceLocator` |
//! | `@Autowired` | 생성자에서 `T::instance()` 호출 |
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | Bean 생명주기 | Singleton + Lazy 초기화 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::ServiceLocator;
//! use crate::core::errors::AppError;
//!
//! #[actix_web::main]
//! async fn main() -> Result<(), AppError> {
//!     // 1. 인프라 컴포넌트 등록
//!     ServiceLocator::set(database);
//!     ServiceLocator::set(redis);
//!
//!     // 2. 모든 서비스/리포지토리 초기화 (인덱스 생성 포함)
//!     ServiceLocator::initialize_all().await?;
//!
//!     // 3. 웹 서버 시작
//!     // ...
//! }
//! ```
//!
//! ## 트러블슈팅
//!
//! ### 순환 참조 감지
//! ```text
//! ❌ Circular dependency detected for type: MenuService
//! ```
//! **해결**: 서비스 계층 구조를 재설계하여 단방향 의존성으로 변경
//!
//! ### 미등록 타입 에러
//! ```text
//! panic: Instance not found: Database. Register it with ServiceLocator::set()...
//! ```
//! **해결**: main에서 `ServiceLocator::set()` 호출 순서 확인

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
