//! 예약 리포지토리 구현
//!
//! 예약(구매 기록)의 데이터 액세스 계층입니다. 결제 상태 전이는
//! 원자적 조건부 업데이트로만 수행됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::{IndexOptions, ReturnDocument},
    IndexModel,
};

use crate::{
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::reservas::Reserva,
};

const COLLECTION: &str = "reservas";

/// 예약 데이터 액세스 리포지토리
pub struct ReservaRepository {
    db: Arc<Database>,
}

impl ReservaRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| ReservaRepository {
            db: ServiceLocator::get::<Database>(),
        })
    }

    fn collection<T: Send + Sync>(&self) -> mongodb::Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 새 예약 생성
    pub async fn create(&self, mut reserva: Reserva) -> Result<Reserva, AppError> {
        let result = self
            .collection::<Reserva>()
            .insert_one(&reserva)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        reserva.id = result.inserted_id.as_object_id();

        Ok(reserva)
    }

    /// ID로 예약 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Reserva>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection::<Reserva>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// Stripe 세션 ID로 예약 조회
    pub async fn find_by_session_id(&self, session_id: &str) -> Result<Option<Reserva>, AppError> {
        self.collection::<Reserva>()
            .find_one(doc! { "stripe_session_id": session_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 사용자별 예약 목록 조회 (최신순)
    pub async fn find_by_user(&self, user_id: &str) -> Result<Vec<Reserva>, AppError> {
        let object_id = Self::parse_id(user_id)?;

        let cursor = self
            .collection::<Reserva>()
            .find(doc! { "user_id": object_id })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 결제 완료 전이 (pending → pagado)
    ///
    /// `estado: "pending"`을 필터에 포함시켜 같은 세션에 대한 중복 확인
    /// 요청이 두 번 전이시키지 못하게 합니다. 이미 전이된 경우 `Ok(None)`.
    pub async fn mark_pagado(&self, session_id: &str) -> Result<Option<Reserva>, AppError> {
        self.collection::<Reserva>()
            .find_one_and_update(
                doc! { "stripe_session_id": session_id, "estado": "pending" },
                doc! { "$set": {
                    "estado": "pagado",
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Reserva>();

        // 세션 ID 역조회용. 세션 없는 예약도 허용하므로 sparse.
        let session_index = IndexModel::builder()
            .keys(doc! { "stripe_session_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .sparse(true)
                    .name("stripe_session_unique".to_string())
                    .build(),
            )
            .build();

        let user_index = IndexModel::builder()
            .keys(doc! { "user_id": 1, "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("user_created_desc".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([session_index, user_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for ReservaRepository {
    fn name(&self) -> &str {
        "reserva_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn reserva_repository_construct() -> Arc<dyn Repository> {
    ReservaRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "reserva_repository",
        construct: reserva_repository_construct,
    }
}
