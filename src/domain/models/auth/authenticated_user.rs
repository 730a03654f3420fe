use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::core::errors::AppError;
use crate::domain::entities::users::UserRole;

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증 후 request extensions에 삽입하며,
/// 핸들러는 extractor 파라미터로 받아서 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: String,

    /// 사용자 역할
    pub rol: UserRole,

    /// cafeteria 역할 계정의 소속 카페테리아 ID
    pub cafeteria_id: Option<String>,
}

impl AuthenticatedUser {
    /// 특정 역할을 보유하고 있는지 확인
    pub fn has_role(&self, rol: UserRole) -> bool {
        self.rol == rol
    }

    /// 여러 역할 중 하나라도 보유하고 있는지 확인
    pub fn has_any_role(&self, roles: &[UserRole]) -> bool {
        roles.iter().any(|&rol| self.rol == rol)
    }

    /// 관리자 권한(admin 또는 manager)을 보유하고 있는지 확인
    pub fn is_admin(&self) -> bool {
        matches!(self.rol, UserRole::Admin | UserRole::Manager)
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다",
            ))),
        }
    }
}

/// 선택적 인증 사용자 추출자
///
/// public/protected 라우트가 섞인 스코프(온보딩)에서 사용합니다.
/// 보호가 필요한 핸들러는 `required()`로 인증을 강제합니다.
#[derive(Debug, Clone)]
pub struct OptionalUser(pub Option<AuthenticatedUser>);

impl OptionalUser {
    /// 인증된 사용자를 요구합니다. 없으면 401을 반환합니다.
    pub fn required(self) -> Result<AuthenticatedUser, AppError> {
        self.0.ok_or_else(|| {
            AppError::AuthenticationError("유효한 인증 토큰이 필요합니다".to_string())
        })
    }
}

impl FromRequest for OptionalUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<AuthenticatedUser>().cloned();
        ready(Ok(OptionalUser(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usuario(rol: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: "64f0c2a1b5e8d93f7a1c0001".to_string(),
            rol,
            cafeteria_id: None,
        }
    }

    #[test]
    fn test_has_any_role() {
        let user = usuario(UserRole::Cafeteria);

        assert!(user.has_any_role(&[UserRole::Cafeteria, UserRole::Admin]));
        assert!(!user.has_any_role(&[UserRole::Student, UserRole::OfficeUser]));
    }

    #[test]
    fn test_is_admin_includes_manager() {
        assert!(usuario(UserRole::Admin).is_admin());
        assert!(usuario(UserRole::Manager).is_admin());
        assert!(!usuario(UserRole::Student).is_admin());
    }

    #[test]
    fn test_optional_user_required() {
        let presente = OptionalUser(Some(usuario(UserRole::Cafeteria)));
        assert!(presente.required().is_ok());

        let ausente = OptionalUser(None);
        assert!(matches!(
            ausente.required(),
            Err(AppError::AuthenticationError(_))
        ));
    }
}
