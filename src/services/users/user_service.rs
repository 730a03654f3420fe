//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 생성, 인증, 알림 설정 변경을 담당하는 서비스입니다.
//!
//! ## 보안
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 cost**: 개발/테스트는 낮게, 운영은 높게 (PasswordConfig)
//! - **최소 노출**: 응답 DTO에는 password_hash를 포함하지 않음

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::{hash, verify};
use mongodb::bson::doc;

use crate::{
    config::PasswordConfig,
    core::errors::{AppError, AppResult, ErrorContext},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::dto::users::{CreateUserRequest, LoginRequest, LoginResponse, UpdatePreferenciasRequest},
    domain::entities::users::{User, UserRole},
    repositories::users::UserRepository,
    services::auth::TokenService,
};

/// 사용자 관리 서비스
pub struct UserService {
    user_repository: Arc<UserRepository>,
    token_service: Arc<TokenService>,
}

impl UserService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| UserService {
            user_repository: UserRepository::instance(),
            token_service: TokenService::instance(),
        })
    }

    /// 새 사용자 계정 생성
    ///
    /// 공개 회원가입은 구매자 역할(student/office_user)만 허용합니다.
    /// cafeteria 계정은 온보딩 완료 시, admin/manager는 운영자가 직접
    /// 생성합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<User> {
        let rol = match request.rol.as_deref() {
            None | Some("student") => UserRole::Student,
            Some("office_user") => UserRole::OfficeUser,
            Some(otro) => {
                return Err(AppError::ValidationError(format!(
                    "이 엔드포인트로 생성할 수 없는 역할입니다: {}",
                    otro
                )));
            }
        };

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost).context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(request.email, request.nombre, password_hash, rol);

        self.user_repository.create(user).await
    }

    /// 로그인 (이메일/비밀번호 검증 후 토큰 발급)
    ///
    /// 사용자 부재와 비밀번호 불일치를 같은 메시지로 응답하여 계정
    /// 존재 여부가 노출되지 않게 합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
            })?;

        if !user.can_authenticate_with_password() {
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        let password_hash = user.password_hash.as_deref().ok_or_else(|| {
            AppError::AuthenticationError("이메일 또는 비밀번호가 올바르지 않습니다".to_string())
        })?;

        let valid = verify(&request.password, password_hash).context("비밀번호 검증 실패")?;

        if !valid {
            return Err(AppError::AuthenticationError(
                "이메일 또는 비밀번호가 올바르지 않습니다".to_string(),
            ));
        }

        let token_pair = self.token_service.generate_token_pair(&user)?;

        let mut response = LoginResponse::new(user, token_pair.access_token, token_pair.expires_in);
        response.refresh_token = token_pair.refresh_token;

        Ok(response)
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: &str) -> AppResult<User> {
        self.user_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }

    /// 알림 수신 설정 부분 변경
    pub async fn update_preferencias(
        &self,
        user_id: &str,
        request: UpdatePreferenciasRequest,
    ) -> AppResult<User> {
        let mut update = doc! {};

        if let Some(avisos_stock) = request.avisos_stock {
            update.insert("preferencias.avisos_stock", avisos_stock);
        }
        if let Some(avisos_recurrencia) = request.avisos_recurrencia {
            update.insert("preferencias.avisos_recurrencia", avisos_recurrencia);
        }

        if update.is_empty() {
            return self.get_user(user_id).await;
        }

        update.insert("updated_at", mongodb::bson::DateTime::now());

        self.user_repository
            .update(user_id, update)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

#[async_trait]
impl Service for UserService {
    fn name(&self) -> &str {
        "user_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn user_service_construct() -> Arc<dyn Service> {
    UserService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "user_service",
        construct: user_service_construct,
    }
}
