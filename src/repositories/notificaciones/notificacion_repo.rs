//! 알림 리포지토리 구현
//!
//! 인앱 알림의 데이터 액세스 계층입니다. 재고 부족 팬아웃이 다수의
//! 알림을 한 번에 쓰므로 `insert_many` 경로를 제공합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    IndexModel,
};

use crate::{
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::notificaciones::Notificacion,
};

const COLLECTION: &str = "notificaciones";

/// 알림 데이터 액세스 리포지토리
pub struct NotificacionRepository {
    db: Arc<Database>,
}

impl NotificacionRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| NotificacionRepository {
            db: ServiceLocator::get::<Database>(),
        })
    }

    fn collection<T: Send + Sync>(&self) -> mongodb::Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION)
    }

    /// 알림 한 건 생성
    pub async fn create(&self, mut noti: Notificacion) -> Result<Notificacion, AppError> {
        let result = self
            .collection::<Notificacion>()
            .insert_one(&noti)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        noti.id = result.inserted_id.as_object_id();

        Ok(noti)
    }

    /// 알림 일괄 생성 (팬아웃용)
    ///
    /// 빈 목록이면 DB 호출 없이 0을 반환합니다.
    pub async fn create_many(&self, notis: &[Notificacion]) -> Result<u64, AppError> {
        if notis.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection::<Notificacion>()
            .insert_many(notis)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.inserted_ids.len() as u64)
    }

    /// 사용자별 알림 목록 조회 (최신순)
    pub async fn find_by_user(
        &self,
        user_id: &ObjectId,
        limit: i64,
    ) -> Result<Vec<Notificacion>, AppError> {
        let cursor = self
            .collection::<Notificacion>()
            .find(doc! { "user_id": user_id })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 알림 읽음 처리
    ///
    /// 본인 소유 알림만 매칭되도록 `user_id`를 필터에 포함합니다.
    pub async fn mark_leida(&self, id: &str, user_id: &ObjectId) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self
            .collection::<Notificacion>()
            .update_one(
                doc! { "_id": object_id, "user_id": user_id },
                doc! { "$set": { "leida": true } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_created_desc".to_string())
                    .build(),
            )
            .build();

        self.collection::<Notificacion>()
            .create_indexes([user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for NotificacionRepository {
    fn name(&self) -> &str {
        "notificacion_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn notificacion_repository_construct() -> Arc<dyn Repository> {
    NotificacionRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "notificacion_repository",
        construct: notificacion_repository_construct,
    }
}
