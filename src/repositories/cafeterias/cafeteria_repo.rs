//! 카페테리아 리포지토리 구현
//!
//! 카페테리아 파트너와 온보딩 부속 컬렉션(문서 메타데이터, 감사 로그)의
//! 데이터 액세스 계층입니다. 상태 전이는 현재 상태를 필터에 포함하는
//! 조건부 업데이트로만 수행하여 동시 요청의 이중 전이를 막습니다.

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
    domain::entities::cafeterias::{Cafeteria, CafeteriaAudit, CafeteriaDocumento, EstadoOnboarding},
};

const COLLECTION: &str = "cafeterias";
const COLLECTION_DOCUMENTOS: &str = "cafeteria_documentos";
const COLLECTION_AUDITORIA: &str = "cafeteria_auditoria";

/// 카페테리아 데이터 액세스 리포지토리
pub struct CafeteriaRepository {
    db: Arc<Database>,
}

impl CafeteriaRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| CafeteriaRepository {
            db: ServiceLocator::get::<Database>(),
        })
    }

    fn collection(&self) -> mongodb::Collection<Cafeteria> {
        self.db.get_database().collection(COLLECTION)
    }

    fn documentos_collection(&self) -> mongodb::Collection<CafeteriaDocumento> {
        self.db.get_database().collection(COLLECTION_DOCUMENTOS)
    }

    fn auditoria_collection(&self) -> mongodb::Collection<CafeteriaAudit> {
        self.db.get_database().collection(COLLECTION_AUDITORIA)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// 새 카페테리아 등록
    pub async fn create(&self, mut cafeteria: Cafeteria) -> Result<Cafeteria, AppError> {
        if self
            .find_by_email(&cafeteria.email_contacto)
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        let result = self
            .collection()
            .insert_one(&cafeteria)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cafeteria.id = result.inserted_id.as_object_id();

        Ok(cafeteria)
    }

    /// ID로 카페테리아 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Cafeteria>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 연락 이메일로 카페테리아 조회
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Cafeteria>, AppError> {
        self.collection()
            .find_one(doc! { "email_contacto": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 온보딩 상태 전이 (조건부)
    ///
    /// `actual` 상태인 문서만 매칭하므로 동시 요청이 같은 전이를 두 번
    /// 수행할 수 없습니다. 전이에 성공하면 감사 로그를 함께 남깁니다.
    pub async fn update_estado(
        &self,
        id: &str,
        actual: EstadoOnboarding,
        nuevo: EstadoOnboarding,
    ) -> Result<Option<Cafeteria>, AppError> {
        let object_id = Self::parse_id(id)?;

        let updated = self
            .collection()
            .find_one_and_update(
                doc! { "_id": object_id, "estado_onboarding": actual.as_str() },
                doc! { "$set": {
                    "estado_onboarding": nuevo.as_str(),
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            self.append_audit(CafeteriaAudit::new(
                object_id,
                "estado_cambiado".to_string(),
                format!("{} -> {}", actual.as_str(), nuevo.as_str()),
            ))
            .await?;
        }

        Ok(updated)
    }

    /// Stripe 연결 계정 ID 저장
    pub async fn set_stripe_account(
        &self,
        id: &str,
        account_id: &str,
    ) -> Result<Option<Cafeteria>, AppError> {
        let object_id = Self::parse_id(id)?;

        self.collection()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "stripe_account_id": account_id,
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 온보딩 문서 메타데이터 저장
    pub async fn add_documento(
        &self,
        mut documento: CafeteriaDocumento,
    ) -> Result<CafeteriaDocumento, AppError> {
        let result = self
            .documentos_collection()
            .insert_one(&documento)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        documento.id = result.inserted_id.as_object_id();

        Ok(documento)
    }

    /// 카페테리아의 업로드 문서 수
    pub async fn count_documentos(&self, cafeteria_id: &ObjectId) -> Result<u64, AppError> {
        self.documentos_collection()
            .count_documents(doc! { "cafeteria_id": cafeteria_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 감사 로그 추가 (append-only)
    pub async fn append_audit(&self, audit: CafeteriaAudit) -> Result<(), AppError> {
        self.auditoria_collection()
            .insert_one(&audit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    /// 카페테리아의 감사 로그 조회 (시간순)
    pub async fn find_audit(&self, cafeteria_id: &ObjectId) -> Result<Vec<CafeteriaAudit>, AppError> {
        let cursor = self
            .auditoria_collection()
            .find(doc! { "cafeteria_id": cafeteria_id })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 추천 코드로 등록된 카페테리아 수
    pub async fn count_by_codigo_referido(&self, codigo: &str) -> Result<u64, AppError> {
        self.collection()
            .count_documents(doc! { "codigo_referido": codigo })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email_contacto": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_contacto_unique".to_string())
                    .build(),
            )
            .build();

        let referido_index = IndexModel::builder()
            .keys(doc! { "codigo_referido": 1 })
            .options(
                IndexOptions::builder()
                    .sparse(true)
                    .name("codigo_referido".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, referido_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documento_index = IndexModel::builder()
            .keys(doc! { "cafeteria_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("documento_cafeteria".to_string())
                    .build(),
            )
            .build();

        self.documentos_collection()
            .create_indexes([documento_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let audit_index = IndexModel::builder()
            .keys(doc! { "cafeteria_id": 1, "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("audit_cafeteria_created".to_string())
                    .build(),
            )
            .build();

        self.auditoria_collection()
            .create_indexes([audit_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for CafeteriaRepository {
    fn name(&self) -> &str {
        "cafeteria_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn cafeteria_repository_construct() -> Arc<dyn Repository> {
    CafeteriaRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "cafeteria_repository",
        construct: cafeteria_repository_construct,
    }
}
