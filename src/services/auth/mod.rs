//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스/리프레시 토큰 관리
//! - 토큰 생성, 검증, 갱신
//! - 역할 기반 권한 관리
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 토큰 만료 시간 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::instance();
//! let tokens = token_service.generate_token_pair(&user)?;
//! ```

pub mod token_service;

pub use token_service::*;
