//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT 관련 설정
//! - [`payment_config`] - Stripe 결제 관련 설정
//! - [`integrations_config`] - 이메일/LLM 외부 통합 설정
//! - [`jobs_config`] - 배치 작업(반복 메뉴, 재고 알림) 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//! Spring Profile과 유사한 방식으로 동작합니다.
//!
//! ### 2. 보안 우선 (Security First)
//!
//! - 민감한 정보(Stripe 키, API 키)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 프로덕션에서는 필수 설정값 누락 시 패닉
//!
//! ## 환경 변수 설정 가이드
//!
//! ### 필수 환경 변수 (프로덕션)
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # JWT 설정
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 외부 통합
//! export STRIPE_SECRET_KEY="sk_live_..."
//! export EMAIL_API_KEY="your-email-api-key"
//! export LLM_API_KEY="your-llm-api-key"
//! ```
//!
//! ### 선택적 환경 변수
//!
//! ```bash
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export BCRYPT_COST="12"           # 4-15 범위
//! export STOCK_LOW_THRESHOLD="5"
//! export RECURRENCE_AVISO_DIAS="3"
//! export JOBS_INTERVAL_SECONDS="3600"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;
pub mod auth_config;
pub mod payment_config;
pub mod integrations_config;
pub mod jobs_config;

pub use data_config::*;
pub use auth_config::*;
pub use payment_config::*;
pub use integrations_config::*;
pub use jobs_config::*;
