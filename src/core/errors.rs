//! # Application Error Handling System
//!
//! 플랫팔 백엔드 전역에서 사용하는 통합 에러 처리 시스템입니다.
//! Spring Framework의 `@ExceptionHandler`와 글로벌 에러 처리 메커니즘을
//! Rust의 타입 시스템과 결합하여 안전하고 일관된 에러 처리를 제공합니다.
//!
//! ## 설계 철학
//!
//! - **계층화된 분류**: 인프라(DB/캐시/외부 API), 비즈니스(검증/충돌/없음), 보안(인증/권한) 에러 구분
//! - **자동 HTTP 변환**: `ResponseError` 구현으로 모든 에러가 표준 JSON 응답으로 변환
//! - **정보 최소 노출**: 클라이언트에는 에러 메시지만 전달하고 스택 트레이스는 노출하지 않음
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락, 형식 오류 |
//! | `NotFound` | 404 Not Found | 메뉴/예약/카페테리아 없음 |
//! | `ConflictError` | 409 Conflict | 중복 이메일, 온보딩 상태 위반 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 만료, 로그인 실패 |
//! | `AuthorizationError` | 403 Forbidden | 역할 권한 부족 |
//! | `DatabaseError` | 500 Internal Server Error | MongoDB 오류 |
//! | `RedisError` | 500 Internal Server Error | 캐시 오류 |
//! | `ExternalServiceError` | 500 Internal Server Error | Stripe/이메일/LLM API 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! impl MenuService {
//!     async fn reservar(&self, req: ReservarRequest) -> Result<Reserva, AppError> {
//!         let menu = self.menu_repository.find_by_id(&req.menu_id).await?
//!             .ok_or_else(|| AppError::NotFound(
//!                 format!("메뉴를 찾을 수 없습니다: {}", req.menu_id)
//!             ))?;
//!
//!         if menu.stock_disponible < req.cantidad {
//!             return Err(AppError::ConflictError(
//!                 "남은 재고가 부족합니다".to_string()
//!             ));
//!         }
//!         // ...
//!     }
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror` 크레이트를 사용하여 자동으로 `Error` trait을 구현하고,
/// `actix_web::ResponseError`를 구현하여 HTTP 응답으로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// collection.insert_one(menu).await
    ///     .map_err(|e| AppError::DatabaseError(
    ///         format!("메뉴 저장 실패: {}", e)
    ///     ))?;
    /// ```
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러
    ///
    /// Redis 서버와의 통신 오류나 캐시 연산 실패를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 입력값 검증 에러
    ///
    /// 클라이언트가 제공한 데이터가 비즈니스 규칙이나 형식 요구사항을
    /// 만족하지 않을 때 발생합니다. 400 Bad Request로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 결제 요청에 `precio_total` 누락
    /// - 잘못된 요일 이름 (`dias_semana`)
    /// - 허용되지 않는 문서 MIME 타입 / 크기 초과
    /// - 유효하지 않은 ObjectId 형식
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 요청한 메뉴, 예약, 사용자, 카페테리아가 존재하지 않을 때
    /// 발생합니다. 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 비즈니스 규칙 위반이나 중복 데이터 생성 시도 시 발생합니다.
    /// 409 Conflict로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 중복 이메일로 회원가입 시도
    /// - 온보딩 단계 건너뛰기 (이메일 인증 전 문서 업로드 등)
    /// - 재고 부족 상태에서의 예약
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러
    ///
    /// 사용자의 신원을 확인할 수 없을 때 발생합니다.
    /// 401 Unauthorized로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 잘못된 로그인 정보
    /// - 만료된 JWT 토큰
    /// - 유효하지 않은 토큰 서명
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러
    ///
    /// 인증된 사용자가 특정 작업을 수행할 권한이 없을 때 발생합니다.
    /// 403 Forbidden으로 응답됩니다.
    ///
    /// # 발생 시나리오
    /// - 학생 계정으로 카페테리아 전용 기능 접근
    /// - 관리자 전용 작업 트리거 엔드포인트 접근
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러
    ///
    /// Stripe, 이메일 API, LLM API 호출 실패 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    ///
    /// # 예제
    /// ```rust,ignore
    /// let response = client.post(&url).form(&params).send().await
    ///     .map_err(|e| AppError::ExternalServiceError(
    ///         format!("Stripe 세션 생성 요청 실패: {}", e)
    ///     ))?;
    /// ```
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류나 프로그래밍 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    ///
    /// # 응답 형식
    ///
    /// ```json
    /// {
    ///   "error": "Human readable error message"
    /// }
    /// ```
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
///
/// ```rust,ignore
/// use crate::core::errors::AppResult;
///
/// async fn materializar_hoy(&self) -> AppResult<MaterializacionResumen> {
///     // 구현...
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::{AppError, ErrorContext};
///
/// let decoded = base64::engine::general_purpose::STANDARD
///     .decode(&payload.contenido_base64)
///     .context("문서 디코딩 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("precio_total이 필요합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("메뉴를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 등록된 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("토큰이 만료되었습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("접근 권한이 부족합니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_external_service_error_response() {
        let error = AppError::ExternalServiceError("Stripe API 오류".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
