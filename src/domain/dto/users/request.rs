//! 사용자 요청 DTO
//!
//! 회원가입/로그인/알림 설정 요청의 입력 검증을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 표시 이름 (1-50자, 유니코드 지원)
    #[validate(length(min = 1, max = 50, message = "표시 이름은 1-50자 사이여야 합니다"))]
    pub nombre: String,

    /// 계정 비밀번호 (최소 8자, 대소문자+숫자 포함)
    #[validate(length(min = 8, message = "비밀번호는 최소 8자 이상이어야 합니다"))]
    #[validate(custom(function = "validate_password_strength"))]
    pub password: String,

    /// 역할 (student / office_user). 생략 시 student.
    /// cafeteria/admin 계정은 이 엔드포인트로 생성할 수 없습니다.
    pub rol: Option<String>,
}

/// 로그인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호가 필요합니다"))]
    pub password: String,
}

/// 알림 수신 설정 변경 요청 DTO
///
/// 전달된 필드만 변경합니다 (부분 업데이트).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePreferenciasRequest {
    pub avisos_stock: Option<bool>,
    pub avisos_recurrencia: Option<bool>,
}

/// 비밀번호 보안 강도 검증 (대문자, 소문자, 숫자 필수 포함)
fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    if !(has_uppercase && has_lowercase && has_digit) {
        return Err(ValidationError::new("weak_password")
            .with_message("비밀번호는 대문자, 소문자, 숫자를 포함해야 합니다".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_valido() {
        let req = CreateUserRequest {
            email: "ana@uni.example".to_string(),
            nombre: "Ana García".to_string(),
            password: "Segura123".to_string(),
            rol: Some("student".to_string()),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_password_debil_falla() {
        let req = CreateUserRequest {
            email: "ana@uni.example".to_string(),
            nombre: "Ana García".to_string(),
            password: "sinmayusculas1".to_string(),
            rol: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_email_invalido_falla() {
        let req = LoginRequest {
            email: "no-es-email".to_string(),
            password: "Segura123".to_string(),
        };

        assert!(req.validate().is_err());
    }
}
