//! 온보딩 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::cafeterias::{Cafeteria, CafeteriaDocumento};

/// 카페테리아 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeteriaResponse {
    pub id: String,
    pub nombre: String,
    pub campus: String,
    pub email_contacto: String,
    /// 온보딩 상태 (snake_case 문자열)
    pub estado_onboarding: String,
    pub stripe_account_id: Option<String>,
    pub codigo_referido: Option<String>,
    pub created_at: DateTime,
}

impl From<Cafeteria> for CafeteriaResponse {
    fn from(cafeteria: Cafeteria) -> Self {
        let Cafeteria {
            id,
            nombre,
            campus,
            email_contacto,
            estado_onboarding,
            stripe_account_id,
            codigo_referido,
            created_at,
            ..
        } = cafeteria;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            nombre,
            campus,
            email_contacto,
            estado_onboarding: estado_onboarding.as_str().to_string(),
            stripe_account_id,
            codigo_referido,
            created_at,
        }
    }
}

/// 문서 업로드 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentoResponse {
    pub id: String,
    pub nombre_archivo: String,
    pub mime_type: String,
    pub tamano_bytes: u64,
}

impl From<CafeteriaDocumento> for DocumentoResponse {
    fn from(doc: CafeteriaDocumento) -> Self {
        Self {
            id: doc.id.map(|id| id.to_hex()).unwrap_or_default(),
            nombre_archivo: doc.nombre_archivo,
            mime_type: doc.mime_type,
            tamano_bytes: doc.tamano_bytes,
        }
    }
}

/// 추천 코드 조회 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferidoResponse {
    /// 추천 코드
    pub codigo: String,
    /// 이 코드로 등록된 카페테리아 수
    pub cafeterias_registradas: u64,
}
