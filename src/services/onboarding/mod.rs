//! 카페테리아 온보딩 서비스 모듈
//!
//! 등록 → 이메일 확인 → 문서 업로드 → KYC 승인 → 계약 생성으로 이어지는
//! 온보딩 워크플로우를 담당합니다.

pub mod onboarding_service;

pub use onboarding_service::*;
