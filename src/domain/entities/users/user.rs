//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 역할 기반 접근 제어와 알림 수신 설정을 포함한 사용자 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 라우트 접근 제어의 기준이 되는 역할입니다.
/// MongoDB에는 snake_case 문자열로 저장됩니다 (예: "office_user").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 학생 (일반 구매자)
    Student,
    /// 교직원/오피스 구매자
    OfficeUser,
    /// 카페테리아 운영 계정
    Cafeteria,
    /// 플랫폼 관리자
    Admin,
    /// 운영 매니저 (관리자 하위 권한)
    Manager,
}

impl UserRole {
    /// JWT claim과 로그에 사용하는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::OfficeUser => "office_user",
            UserRole::Cafeteria => "cafeteria",
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
        }
    }

    /// 문자열에서 역할 파싱 (JWT claim 복원용)
    pub fn parse(value: &str) -> Option<UserRole> {
        match value {
            "student" => Some(UserRole::Student),
            "office_user" => Some(UserRole::OfficeUser),
            "cafeteria" => Some(UserRole::Cafeteria),
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            _ => None,
        }
    }
}

/// 알림 수신 설정
///
/// 사용자가 어떤 종류의 알림을 받을지 선택합니다. 기본값은 모두 수신입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenciasNotificacion {
    /// 재고 부족 알림 수신 여부
    pub avisos_stock: bool,
    /// 반복 메뉴 만료 임박 알림 수신 여부
    pub avisos_recurrencia: bool,
}

impl Default for PreferenciasNotificacion {
    fn default() -> Self {
        Self {
            avisos_stock: true,
            avisos_recurrencia: true,
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 이메일/패스워드 인증과 역할 기반 접근 제어를 지원합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 표시 이름
    pub nombre: String,
    /// 해시된 비밀번호
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    /// 사용자 역할
    pub rol: UserRole,
    /// 알림 수신 설정
    #[serde(default)]
    pub preferencias: PreferenciasNotificacion,
    /// cafeteria 역할 계정의 소속 카페테리아
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cafeteria_id: Option<ObjectId>,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    pub fn new(email: String, nombre: String, password_hash: String, rol: UserRole) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            email,
            nombre,
            password_hash: Some(password_hash),
            rol,
            preferencias: PreferenciasNotificacion::default(),
            cafeteria_id: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// 카페테리아 운영 계정 생성 (소속 카페테리아 연결 포함)
    pub fn new_cafeteria_account(
        email: String,
        nombre: String,
        password_hash: String,
        cafeteria_id: ObjectId,
    ) -> Self {
        let mut user = Self::new(email, nombre, password_hash, UserRole::Cafeteria);
        user.cafeteria_id = Some(cafeteria_id);
        user
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.is_active && self.password_hash.is_some()
    }

    /// 재고 부족 이메일 수신 대상인지 확인
    pub fn quiere_aviso_stock(&self) -> bool {
        self.is_active && self.preferencias.avisos_stock
    }

    /// 만료 임박 이메일 수신 대상인지 확인
    pub fn quiere_aviso_recurrencia(&self) -> bool {
        self.is_active && self.preferencias.avisos_recurrencia
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rol_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&UserRole::OfficeUser).unwrap(),
            "\"office_user\""
        );
        assert_eq!(
            serde_json::to_string(&UserRole::Student).unwrap(),
            "\"student\""
        );
    }

    #[test]
    fn test_rol_parse_roundtrip() {
        for rol in [
            UserRole::Student,
            UserRole::OfficeUser,
            UserRole::Cafeteria,
            UserRole::Admin,
            UserRole::Manager,
        ] {
            assert_eq!(UserRole::parse(rol.as_str()), Some(rol));
        }

        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn test_new_user_defaults() {
        let user = User::new(
            "ana@uni.example".to_string(),
            "Ana García".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Student,
        );

        assert!(user.is_active);
        assert!(user.preferencias.avisos_stock);
        assert!(user.preferencias.avisos_recurrencia);
        assert!(user.cafeteria_id.is_none());
        assert!(user.can_authenticate_with_password());
    }

    #[test]
    fn test_quiere_aviso_respeta_preferencias() {
        let mut user = User::new(
            "ana@uni.example".to_string(),
            "Ana García".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Student,
        );

        assert!(user.quiere_aviso_stock());
        assert!(user.quiere_aviso_recurrencia());

        user.preferencias.avisos_stock = false;
        assert!(!user.quiere_aviso_stock());
        assert!(user.quiere_aviso_recurrencia());
    }

    #[test]
    fn test_quiere_aviso_excluye_inactivos() {
        let mut user = User::new(
            "ana@uni.example".to_string(),
            "Ana García".to_string(),
            "$2b$10$hash".to_string(),
            UserRole::Student,
        );
        user.is_active = false;

        assert!(!user.quiere_aviso_stock());
        assert!(!user.quiere_aviso_recurrencia());
    }

    #[test]
    fn test_new_cafeteria_account_links_cafeteria() {
        let cafeteria_id = ObjectId::new();
        let user = User::new_cafeteria_account(
            "central@uni.example".to_string(),
            "Cafetería Central".to_string(),
            "$2b$10$hash".to_string(),
            cafeteria_id,
        );

        assert_eq!(user.rol, UserRole::Cafeteria);
        assert_eq!(user.cafeteria_id, Some(cafeteria_id));
    }
}
