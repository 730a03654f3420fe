//! Cafeterias Entity Module
//!
//! 카페테리아 파트너 도메인의 엔티티들을 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### Cafeteria Entity
//! - **온보딩 상태 머신**: registrada → email_verificado → documentos_subidos
//!   → kyc_aprobado → contrato_generado (+ 언제든 rechazada 가능)
//! - **Stripe Connect**: 계약 생성 단계에서 연결 계정 ID 저장
//!
//! ### CafeteriaDocumento / CafeteriaAudit
//! - 온보딩 문서 메타데이터와 append-only 감사 로그

pub mod cafeteria;

pub use cafeteria::*;
