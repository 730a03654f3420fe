//! # 메뉴 리포지토리 구현
//!
//! 메뉴 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 멱등 실체화
//!
//! 반복 템플릿의 실체화는 `{cafeteria_id, plato, fecha}` 유니크 부분
//! 인덱스에 의존합니다. 같은 날 스케줄러가 두 번 돌아도 두 번째 삽입은
//! duplicate key로 거부되어 중복 메뉴가 생기지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
    IndexModel,
};

use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::{Repository, RepositoryRegistration, ServiceLocator},
    db::Database,
    domain::entities::menus::Menu,
};

const COLLECTION: &str = "menus";

/// 메뉴 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - **개별 메뉴**: `menu:{id}`, TTL 600초
/// - **쓰기 후 무효화**: 재고 변경 등 수정 시 해당 키 삭제
///
/// ## 인덱스
///
/// - `{cafeteria_id, plato, fecha}` UNIQUE (fecha가 문자열인 문서만) — 실체화 멱등성
/// - `{fecha}` — 날짜별 목록 조회
/// - `{es_recurrente, aviso_enviado}` — 스케줄러 템플릿 스캔
pub struct MenuRepository {
    db: Arc<Database>,
    redis: Arc<RedisClient>,
}

impl MenuRepository {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| MenuRepository {
            db: ServiceLocator::get::<Database>(),
            redis: ServiceLocator::get::<RedisClient>(),
        })
    }

    fn collection<T: Send + Sync>(&self) -> mongodb::Collection<T> {
        self.db.get_database().collection::<T>(COLLECTION)
    }

    fn cache_key(&self, id: &str) -> String {
        format!("menu:{}", id)
    }

    fn parse_id(id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
    }

    /// duplicate key(E11000) 에러인지 판별
    fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
        match error.kind.as_ref() {
            ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == 11000,
            _ => false,
        }
    }

    /// ID로 메뉴 조회 (캐시 우선)
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Menu>, AppError> {
        let object_id = Self::parse_id(id)?;
        let cache_key = self.cache_key(id);

        if let Ok(Some(cached)) = self.redis.get::<Menu>(&cache_key).await {
            return Ok(Some(cached));
        }

        let menu = self
            .collection::<Menu>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if let Some(ref menu) = menu {
            let _ = self.redis.set_with_expiry(&cache_key, menu, 600).await;
        }

        Ok(menu)
    }

    /// 새 메뉴 생성
    pub async fn create(&self, mut menu: Menu) -> Result<Menu, AppError> {
        let result = self
            .collection::<Menu>()
            .insert_one(&menu)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        menu.id = result.inserted_id.as_object_id();

        Ok(menu)
    }

    /// 실체화된 일일 메뉴 삽입 (멱등)
    ///
    /// 유니크 부분 인덱스 덕분에 같은 `{cafeteria_id, plato, fecha}` 조합이
    /// 이미 존재하면 duplicate key로 거부됩니다. 그 경우 에러가 아니라
    /// `Ok(false)`를 반환하여 호출자가 "건너뜀"으로 집계할 수 있게 합니다.
    pub async fn create_materializado(&self, menu: &Menu) -> Result<bool, AppError> {
        match self.collection::<Menu>().insert_one(menu).await {
            Ok(_) => Ok(true),
            Err(e) if Self::is_duplicate_key(&e) => Ok(false),
            Err(e) => Err(AppError::DatabaseError(e.to_string())),
        }
    }

    /// 반복 메뉴 템플릿 스캔 (fecha가 없는 문서만)
    ///
    /// 스케줄러가 매 실행마다 호출합니다. `limit`으로 스캔 배치 크기를
    /// 제한합니다.
    pub async fn find_plantillas_recurrentes(&self, limit: i64) -> Result<Vec<Menu>, AppError> {
        let cursor = self
            .collection::<Menu>()
            .find(doc! { "es_recurrente": true, "fecha": { "$exists": false } })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 만료 알림 후보 템플릿 스캔
    ///
    /// 종료일이 있고 아직 알림을 보내지 않은 반복 템플릿만 반환합니다.
    /// 정확한 날짜 윈도우 판정은 엔티티 메서드가 수행합니다.
    pub async fn find_plantillas_sin_aviso(&self, limit: i64) -> Result<Vec<Menu>, AppError> {
        let filter = doc! {
            "es_recurrente": true,
            "aviso_enviado": false,
            "fecha_fin_recurrencia": { "$exists": true },
        };

        let cursor = self
            .collection::<Menu>()
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 특정 날짜의 일일 메뉴 목록 조회 (campus 필터 선택)
    pub async fn find_by_fecha(
        &self,
        fecha: &str,
        campus: Option<&str>,
    ) -> Result<Vec<Menu>, AppError> {
        let mut filter = doc! { "fecha": fecha };
        if let Some(campus) = campus {
            filter.insert("campus", campus);
        }

        let cursor = self
            .collection::<Menu>()
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 당일 재고 부족 메뉴 스캔 (0 < stock_disponible <= umbral)
    ///
    /// 재고가 0인 메뉴는 이미 매진이므로 알림 대상에서 제외합니다.
    pub async fn find_stock_bajo(
        &self,
        fecha: &str,
        umbral: i32,
        limit: i64,
    ) -> Result<Vec<Menu>, AppError> {
        let filter = doc! {
            "fecha": fecha,
            "stock_disponible": { "$gt": 0, "$lte": umbral },
        };

        let cursor = self
            .collection::<Menu>()
            .find(filter)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 카페테리아별 메뉴 목록 조회
    pub async fn find_by_cafeteria(&self, cafeteria_id: &str) -> Result<Vec<Menu>, AppError> {
        let object_id = Self::parse_id(cafeteria_id)?;

        let cursor = self
            .collection::<Menu>()
            .find(doc! { "cafeteria_id": object_id })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 만료 알림 발송 완료 표시 (at-most-once)
    ///
    /// `aviso_enviado=false`인 문서만 매칭하므로 동시 실행에서도 한 번만
    /// true를 반환합니다. 호출자는 true일 때만 이메일을 발송해야 합니다.
    pub async fn mark_aviso_enviado(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self
            .collection::<Menu>()
            .update_one(
                doc! { "_id": id, "aviso_enviado": false },
                doc! { "$set": {
                    "aviso_enviado": true,
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.modified_count > 0 {
            let _ = self.redis.del(&self.cache_key(&id.to_hex())).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 만료 알림 발송 표시 해제
    ///
    /// 플래그를 선점했지만 팬아웃이 실패한 경우 되돌려서 다음 스캔이
    /// 재시도할 수 있게 합니다.
    pub async fn clear_aviso_enviado(&self, id: &ObjectId) -> Result<(), AppError> {
        self.collection::<Menu>()
            .update_one(
                doc! { "_id": id, "aviso_enviado": true },
                doc! { "$set": {
                    "aviso_enviado": false,
                    "updated_at": mongodb::bson::DateTime::now(),
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let _ = self.redis.del(&self.cache_key(&id.to_hex())).await;

        Ok(())
    }

    /// 재고 원자적 차감
    ///
    /// `stock_disponible >= cantidad` 조건을 필터에 포함시켜 음수 재고를
    /// 원천 차단합니다. 재고 부족이면 `Ok(None)`을 반환합니다.
    pub async fn decrementar_stock(
        &self,
        id: &str,
        cantidad: i32,
    ) -> Result<Option<Menu>, AppError> {
        let object_id = Self::parse_id(id)?;

        let updated = self
            .collection::<Menu>()
            .find_one_and_update(
                doc! {
                    "_id": object_id,
                    "stock_disponible": { "$gte": cantidad },
                },
                doc! {
                    "$inc": { "stock_disponible": -cantidad },
                    "$set": { "updated_at": mongodb::bson::DateTime::now() },
                },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(&self.cache_key(id)).await;
        }

        Ok(updated)
    }

    /// 메뉴 부분 업데이트
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<Menu>, AppError> {
        let object_id = Self::parse_id(id)?;

        let updated = self
            .collection::<Menu>()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if updated.is_some() {
            let _ = self.redis.del(&self.cache_key(id)).await;
        }

        Ok(updated)
    }

    /// 메뉴 삭제
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = Self::parse_id(id)?;

        let result = self
            .collection::<Menu>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            let _ = self.redis.del(&self.cache_key(id)).await;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// 데이터베이스 인덱스 생성
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collection = self.collection::<Menu>();

        // 실체화 멱등성의 핵심: fecha가 문자열인 문서(일일 메뉴)에만 적용되는
        // 유니크 부분 인덱스. 반복 템플릿(fecha 없음)은 제약에서 제외됩니다.
        let materializacion_index = IndexModel::builder()
            .keys(doc! { "cafeteria_id": 1, "plato": 1, "fecha": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .partial_filter_expression(doc! { "fecha": { "$type": "string" } })
                    .name("cafeteria_plato_fecha_unique".to_string())
                    .build(),
            )
            .build();

        let fecha_index = IndexModel::builder()
            .keys(doc! { "fecha": 1 })
            .options(IndexOptions::builder().name("fecha_asc".to_string()).build())
            .build();

        let scan_index = IndexModel::builder()
            .keys(doc! { "es_recurrente": 1, "aviso_enviado": 1 })
            .options(
                IndexOptions::builder()
                    .name("recurrente_aviso".to_string())
                    .build(),
            )
            .build();

        collection
            .create_indexes([materializacion_index, fecha_index, scan_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl Repository for MenuRepository {
    fn name(&self) -> &str {
        "menu_repository"
    }

    fn collection_name(&self) -> &str {
        COLLECTION
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.create_indexes().await?;
        Ok(())
    }
}

fn menu_repository_construct() -> Arc<dyn Repository> {
    MenuRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "menu_repository",
        construct: menu_repository_construct,
    }
}
