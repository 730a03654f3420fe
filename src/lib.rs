//! 플랫팔 백엔드
//!
//! 대학 캠퍼스 잉여 음식 마켓플레이스의 Rust 백엔드입니다.
//! 반복 메뉴 실체화, 재고 알림 팬아웃, Stripe Checkout 결제,
//! 카페테리아 온보딩 워크플로우를 제공합니다.
//!
//! # Features
//!
//! - **메뉴 게시**: 일일 메뉴와 반복 템플릿, 날짜별 조회
//! - **반복 실체화**: 템플릿 → 당일 메뉴 생성 (부분 유니크 인덱스로 멱등)
//! - **재고 관리**: 원자적 차감, 임계값 이하 시 알림 팬아웃
//! - **결제**: Stripe Checkout 세션 생성, 서버 측 결제 확인
//! - **온보딩**: 카페테리아 등록 → 계약 생성 상태 머신
//! - **JWT 인증**: 역할 기반 접근 제어 (student/office_user/cafeteria/admin/manager)
//! - **MongoDB + Redis**: 영구 저장과 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (+ 스케줄러 잡)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use platpal_backend::services::menus::MenuService;
//! use platpal_backend::services::auth::TokenService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let menu_service = MenuService::instance();
//! let token_service = TokenService::instance();
//!
//! // 오늘 메뉴 조회
//! let menus = menu_service.listar_por_fecha(None).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
pub mod scheduler;
