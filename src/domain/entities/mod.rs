//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! Spring Framework의 JPA Entity와 유사한 역할을 하며, MongoDB 문서와
//! 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## 엔티티 ↔ 컬렉션 매핑
//!
//! | 엔티티 | 컬렉션 | 설명 |
//! |--------|--------|------|
//! | `Menu` | `menus` | 일일 메뉴 및 반복 메뉴 템플릿 |
//! | `Reserva` | `reservas` | 구매/예약 기록 + 결제 세션 연결 |
//! | `User` | `users` | 학생/오피스/카페테리아/관리자 계정 |
//! | `Notificacion` | `notificaciones` | 알림 기록 |
//! | `Cafeteria` | `cafeterias` | 카페테리아 파트너 + 온보딩 상태 |
//! | `CafeteriaDocumento` | `cafeteria_documentos` | 온보딩 문서 메타데이터 |
//! | `CafeteriaAudit` | `cafeteria_auditoria` | 온보딩 감사 로그 (append-only) |
//!
//! ## 공통 규칙
//!
//! - `_id`는 `Option<ObjectId>`로 선언하고 삽입 시 드라이버가 채웁니다
//! - 타임스탬프는 `mongodb::bson::DateTime` 사용
//! - 날짜 필드(`fecha`, `fecha_fin_recurrencia`)는 "YYYY-MM-DD" 문자열 포맷
//! - 순수 판정 로직(오늘 적용 여부, 만료 윈도우, 재고 임계값)은
//!   엔티티 메서드로 캡슐화하여 단위 테스트 가능하게 유지
//!
//! ## Spring Framework와의 비교
//!
//! | Spring JPA Entity | Rust Domain Entity |
//! |------------------|-------------------|
//! | `@Entity` | `#[derive(Serialize, Deserialize)]` |
//! | `@Id` | `#[serde(rename = "_id")]` |
//! | `@CreatedDate` | `created_at: DateTime` |
//! | Bean Validation | validator derive + 커스텀 검증 |
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: 엔티티 간 직접 참조보다는 ObjectId 참조 사용
//! - **인덱스 설계**: 쿼리 패턴에 맞는 복합 인덱스는 각 리포지토리의 `init()`에서 생성

pub mod menus;
pub mod reservas;
pub mod users;
pub mod notificaciones;
pub mod cafeterias;

pub use menus::*;
pub use reservas::*;
pub use users::*;
pub use notificaciones::*;
pub use cafeterias::*;
