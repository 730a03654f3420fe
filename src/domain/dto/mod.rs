//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 민감한 정보(password_hash 등)의 노출 방지
//! - **검증 내장**: validator crate를 통한 비즈니스 규칙 검증
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── menus/          # 메뉴 생성/재고/예약/실체화 요약
//! ├── checkout/       # Checkout 세션 생성/확인
//! ├── onboarding/     # 카페테리아 등록/이메일 확인/문서 업로드
//! ├── users/          # 계정 생성/로그인/알림 설정
//! └── notifications/  # 인앱 알림 조회
//! ```

// 기능별 DTO는 전체 경로로 가져다 씁니다 (예: dto::checkout::ReservaResponse).
// 각 하위 모듈이 request/response를 다시 내보내므로 상위 glob은 두지 않습니다.
pub mod menus;
pub mod checkout;
pub mod onboarding;
pub mod users;
pub mod notifications;
