//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 캐싱 전략
//!
//! ### L1 Cache (Redis)
//! - **TTL**: 10분 (600초)
//! - **키 패턴**:
//!   - 개별 사용자: `user:{user_id}`
//!   - 이메일 조회: `user:email:{email}`
//!
//! ### L2 Storage (MongoDB)
//! - **컬렉션명**: `users`
//! - **인덱스**: email(unique), created_at(desc)
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
//!
//! - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
//! - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
//! - **ConflictError**: 이메일 중복 등 비즈니스 규칙 위반

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
    IndexModel,
};

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::users::User,
};

const COLLECTION: &str = "users";

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,

    /// Redis 캐시 클라이언트
    redis: Arc<RedisClient>,
}

impl UserRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| UserRepository {
            db: ServiceLocator::get::<Database>(),
            redis: ServiceLocator::get::<RedisClient>(),
        })
    }

    fn collection<T: Send + Sync>(&self) -> mongodb::Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION)
    }

    fn cache_key(&self, id: &str) -> String {
        format!("user:{}", id)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 이메일 주소로 사용자 조회 (캐시 우선)
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `user:email:{email}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let cache_key = format!("user:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis.set_with_expiry(&cache_key, user, 600).await;
        }

        Ok(user)
    }

    /// ID로 사용자 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<User>(&cache_key).await {
            return Ok(Some(cached));
        }

        let user = self
            .collection::<User>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = user {
            let _ = self.redis.set_with_expiry(&cache_key, user, 600).await;
        }

        Ok(user)
    }

    /// 새 사용자 생성
    ///
    /// # 비즈니스 규칙
    ///
    /// 1. **이메일 유니크성**: 동일한 이메일로 두 번째 계정 생성 불가
    /// 2. **ID 자동 할당**: MongoDB가 자동으로 ObjectId 생성
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        let result = self
            .collection::<User>()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 정보 부분 업데이트
    ///
    /// `find_one_and_update` + `ReturnDocument::After`로 업데이트와 최신
    /// 문서 조회를 원자적으로 수행합니다.
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<User>, AppError> {
        let object_id = Self::parse_id(id)?;

        let updated_user = self
            .collection::<User>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref user) = updated_user {
            let _ = self.redis.del(&self.cache_key(id)).await;
            let _ = self.redis.del(&format!("user:email:{}", user.email)).await;
        }

        Ok(updated_user)
    }

    /// 재고 부족 알림 수신 대상 조회
    ///
    /// 활성 계정 중 `preferencias.avisos_stock=true`인 구매자(학생/오피스)만
    /// 반환합니다. 팬아웃 대상 산정에 사용됩니다.
    pub async fn find_opted_in_stock_alerts(&self) -> Result<Vec<User>, AppError> {
        let filter = doc! {
            "is_active": true,
            "preferencias.avisos_stock": true,
            "rol": { "$in": ["student", "office_user"] },
        };

        let cursor = self
            .collection::<User>()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 반복 메뉴 만료 알림 수신 대상 조회 (카페테리아 소속 계정)
    pub async fn find_by_cafeteria(&self, cafeteria_id: &ObjectId) -> Result<Vec<User>, AppError> {
        let cursor = self
            .collection::<User>()
            .find(doc! { "cafeteria_id": cafeteria_id, "is_active": true })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<User>();

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn user_repository_construct() -> Arc<dyn Repository> {
    UserRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        construct: user_repository_construct,
    }
}
