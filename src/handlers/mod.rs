//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Web App, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/menus")
//! public class MenuController {
//!     @PostMapping
//!     public ResponseEntity<MenuResponse> createMenu(@Valid @RequestBody CreateMenuRequest req) {
//!         return ResponseEntity.status(HttpStatus.CREATED).body(menuService.create(req));
//!     }
//! }
//! ```
//!
//! 이 모듈의 Rust 구현:
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_menu(
//!     user: AuthenticatedUser,
//!     payload: web::Json<CreateMenuRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let service = MenuService::instance(); // 싱글톤 패턴
//!     let menu = service.create_menu(&user, payload.into_inner()).await?;
//!     Ok(HttpResponse::Created().json(MenuResponse::from(menu)))
//! }
//! ```
//!
//! ## 공통 처리 패턴
//!
//! 1. **입력 검증**: `payload.validate()` → 실패 시 400
//! 2. **인증 컨텍스트**: `AuthenticatedUser` extractor로 미들웨어가 넣은
//!    사용자 정보를 타입 안전하게 추출
//! 3. **에러 전파**: `?` 연산자로 `AppError` 전파, 상태 코드 자동 매핑
//! 4. **엔티티 → 응답 변환**: `From` 구현으로 민감한 필드 제외
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 토큰 검증
//! - **`users`**: 내 정보 조회, 알림 수신 설정 변경
//! - **`menus`**: 메뉴 CRUD, 재고 조정, 직접 예약, 수요 예측
//! - **`checkout`**: Stripe Checkout 세션 생성/결제 확인
//! - **`onboarding`**: 카페테리아 등록 → 계약 생성 워크플로우
//! - **`notifications`**: 인앱 알림 조회/읽음 처리
//! - **`admin`**: 백그라운드 잡 수동 트리거

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod menus;
pub mod notifications;
pub mod onboarding;
pub mod users;
