//! 메뉴 응답 DTO

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::menus::Menu;

/// 메뉴 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuResponse {
    pub id: String,
    pub cafeteria_id: String,
    pub nombre_cafeteria: String,
    pub campus: String,
    pub plato: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock_total: i32,
    pub stock_disponible: i32,
    pub fecha: Option<String>,
    pub es_recurrente: bool,
    pub dias_semana: Vec<String>,
    pub fecha_fin_recurrencia: Option<String>,
    pub created_at: DateTime,
}

impl From<Menu> for MenuResponse {
    fn from(menu: Menu) -> Self {
        let Menu {
            id,
            cafeteria_id,
            nombre_cafeteria,
            campus,
            plato,
            descripcion,
            precio,
            stock_total,
            stock_disponible,
            fecha,
            es_recurrente,
            dias_semana,
            fecha_fin_recurrencia,
            created_at,
            ..
        } = menu;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            cafeteria_id: cafeteria_id.to_hex(),
            nombre_cafeteria,
            campus,
            plato,
            descripcion,
            precio,
            stock_total,
            stock_disponible,
            fecha,
            es_recurrente,
            dias_semana,
            fecha_fin_recurrencia,
            created_at,
        }
    }
}

/// 반복 메뉴 실체화 실행 요약
///
/// 스케줄러 또는 관리자 수동 트리거가 반환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterializacionResumen {
    /// 실체화 대상 날짜 "YYYY-MM-DD"
    pub fecha: String,
    /// 새로 생성된 일일 메뉴 수
    pub creados: u64,
    /// 이미 존재해서 건너뛴 템플릿 수
    pub omitidos: u64,
}
