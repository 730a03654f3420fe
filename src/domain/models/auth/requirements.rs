//! 라우트 인증 요구사항 모델
//!
//! 미들웨어 설정 시 인증 모드와 접근 허용 역할을 선언하는 데 사용됩니다.

use crate::domain::entities::users::UserRole;

/// 인증 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 토큰이 없거나 무효하면 401 거부
    Required,
    /// 토큰이 있으면 추출, 없어도 통과
    Optional,
}

/// 접근에 필요한 역할 요구사항
#[derive(Debug, Clone)]
pub enum RequiredRole {
    /// 단일 역할만 허용
    Single(UserRole),
    /// 나열된 역할 중 하나면 허용
    Any(Vec<UserRole>),
}

impl RequiredRole {
    /// 사용자의 역할이 요구사항을 만족하는지 확인합니다.
    pub fn is_satisfied(&self, rol: UserRole) -> bool {
        match self {
            RequiredRole::Single(required) => rol == *required,
            RequiredRole::Any(allowed) => allowed.contains(&rol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_role() {
        let required = RequiredRole::Single(UserRole::Admin);

        assert!(required.is_satisfied(UserRole::Admin));
        assert!(!required.is_satisfied(UserRole::Student));
    }

    #[test]
    fn test_any_role() {
        let required = RequiredRole::Any(vec![UserRole::Admin, UserRole::Manager]);

        assert!(required.is_satisfied(UserRole::Admin));
        assert!(required.is_satisfied(UserRole::Manager));
        assert!(!required.is_satisfied(UserRole::Cafeteria));
    }
}
