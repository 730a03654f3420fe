//! Menu Entity Implementation
//!
//! 메뉴 엔티티의 핵심 구현체입니다.
//! 일일 판매 메뉴와 반복 메뉴 템플릿을 모두 표현하며, 실체화/만료/재고
//! 판정에 필요한 순수 도메인 로직을 메서드로 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::utils::time_utils;

/// 메뉴 엔티티
///
/// `fecha`가 있으면 특정 날짜의 판매 메뉴이고, 없으면서
/// `es_recurrente=true`이면 반복 템플릿입니다. 템플릿은 매일 스케줄러가
/// 요일 매칭 후 오늘 날짜의 사본으로 실체화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 소유 카페테리아
    pub cafeteria_id: ObjectId,
    /// 카페테리아 표시 이름 (조회 시 조인 비용 절약용 비정규화)
    pub nombre_cafeteria: String,
    /// 캠퍼스 이름
    pub campus: String,
    /// 요리 이름
    pub plato: String,
    /// 요리 설명
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// 가격 (EUR, 소수점 둘째 자리까지)
    pub precio: f64,
    /// 당일 준비 수량
    pub stock_total: i32,
    /// 남은 수량
    pub stock_disponible: i32,
    /// 판매 날짜 "YYYY-MM-DD" (반복 템플릿은 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha: Option<String>,
    /// 반복 템플릿 여부
    pub es_recurrente: bool,
    /// 반복 요일 (스페인어 소문자: "lunes".."domingo")
    #[serde(default)]
    pub dias_semana: Vec<String>,
    /// 반복 종료 날짜 "YYYY-MM-DD" (없으면 무기한)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fecha_fin_recurrencia: Option<String>,
    /// 만료 임박 알림 발송 여부
    #[serde(default)]
    pub aviso_enviado: bool,
    /// 실체화된 사본의 원본 템플릿 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_origen_id: Option<ObjectId>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Menu {
    /// 새 반복 메뉴 템플릿을 생성합니다.
    pub fn new_recurrente(
        cafeteria_id: ObjectId,
        nombre_cafeteria: String,
        campus: String,
        plato: String,
        precio: f64,
        stock_total: i32,
        dias_semana: Vec<String>,
        fecha_fin_recurrencia: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            cafeteria_id,
            nombre_cafeteria,
            campus,
            plato,
            descripcion: None,
            precio,
            stock_total,
            stock_disponible: stock_total,
            fecha: None,
            es_recurrente: true,
            dias_semana,
            fecha_fin_recurrencia,
            aviso_enviado: false,
            menu_origen_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 특정 날짜의 일일 메뉴를 생성합니다.
    pub fn new_diario(
        cafeteria_id: ObjectId,
        nombre_cafeteria: String,
        campus: String,
        plato: String,
        precio: f64,
        stock_total: i32,
        fecha: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            cafeteria_id,
            nombre_cafeteria,
            campus,
            plato,
            descripcion: None,
            precio,
            stock_total,
            stock_disponible: stock_total,
            fecha: Some(fecha),
            es_recurrente: false,
            dias_semana: Vec::new(),
            fecha_fin_recurrencia: None,
            aviso_enviado: false,
            menu_origen_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 이 템플릿이 지정한 요일에 적용되는지 확인합니다.
    ///
    /// 반복 템플릿(`es_recurrente=true`, `fecha=None`)이면서
    /// `dias_semana`에 해당 요일이 포함된 경우에만 true를 반환합니다.
    pub fn aplica_hoy(&self, dia_semana: &str) -> bool {
        self.es_recurrente
            && self.fecha.is_none()
            && self.dias_semana.iter().any(|d| d == dia_semana)
    }

    /// 반복이 지정 날짜 기준으로 이미 종료되었는지 확인합니다.
    ///
    /// `fecha_fin_recurrencia`가 없으면 무기한 반복으로 간주합니다.
    /// 날짜 파싱에 실패하면 안전하게 종료된 것으로 처리하여
    /// 손상된 템플릿이 계속 실체화되는 것을 막습니다.
    pub fn recurrencia_vencida(&self, hoy: chrono::NaiveDate) -> bool {
        match &self.fecha_fin_recurrencia {
            None => false,
            Some(fin) => match time_utils::parse_fecha(fin) {
                Some(fecha_fin) => fecha_fin < hoy,
                None => true,
            },
        }
    }

    /// 반복 종료가 알림 윈도우(1~`dias_aviso`일) 안에 들어왔는지 확인합니다.
    ///
    /// 아직 알림을 보내지 않은 반복 템플릿만 대상이 됩니다.
    pub fn recurrencia_por_vencer(&self, hoy: chrono::NaiveDate, dias_aviso: i64) -> bool {
        if !self.es_recurrente || self.aviso_enviado {
            return false;
        }

        match &self.fecha_fin_recurrencia {
            None => false,
            Some(fin) => match time_utils::dias_hasta(hoy, fin) {
                Some(dias) => dias >= 1 && dias <= dias_aviso,
                None => false,
            },
        }
    }

    /// 남은 재고가 임계값 이하인지 확인합니다 (품절 제외).
    pub fn stock_bajo(&self, umbral: i32) -> bool {
        self.stock_disponible > 0 && self.stock_disponible <= umbral
    }

    /// 이 템플릿을 지정 날짜의 일일 메뉴 사본으로 실체화합니다.
    ///
    /// 재고는 `stock_total`로 초기화되고, 원본 템플릿 ID가
    /// `menu_origen_id`에 기록됩니다.
    pub fn materializar(&self, fecha: &str) -> Menu {
        let now = DateTime::now();

        Menu {
            id: None,
            cafeteria_id: self.cafeteria_id,
            nombre_cafeteria: self.nombre_cafeteria.clone(),
            campus: self.campus.clone(),
            plato: self.plato.clone(),
            descripcion: self.descripcion.clone(),
            precio: self.precio,
            stock_total: self.stock_total,
            stock_disponible: self.stock_total,
            fecha: Some(fecha.to_string()),
            es_recurrente: false,
            dias_semana: Vec::new(),
            fecha_fin_recurrencia: None,
            aviso_enviado: false,
            menu_origen_id: self.id,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn plantilla(dias: Vec<&str>, fin: Option<&str>) -> Menu {
        Menu::new_recurrente(
            ObjectId::new(),
            "Cafetería Central".to_string(),
            "Campus Norte".to_string(),
            "Paella de verduras".to_string(),
            3.50,
            20,
            dias.into_iter().map(String::from).collect(),
            fin.map(String::from),
        )
    }

    #[test]
    fn test_aplica_hoy_matching_day() {
        let menu = plantilla(vec!["lunes", "miercoles"], None);

        assert!(menu.aplica_hoy("lunes"));
        assert!(menu.aplica_hoy("miercoles"));
        assert!(!menu.aplica_hoy("viernes"));
    }

    #[test]
    fn test_aplica_hoy_rejects_dated_menu() {
        let mut menu = plantilla(vec!["lunes"], None);
        menu.fecha = Some("2026-08-31".to_string());

        // 이미 실체화된 사본은 템플릿이 아님
        assert!(!menu.aplica_hoy("lunes"));
    }

    #[test]
    fn test_recurrencia_vencida() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

        let vigente = plantilla(vec!["lunes"], Some("2026-12-31"));
        assert!(!vigente.recurrencia_vencida(hoy));

        let vencida = plantilla(vec!["lunes"], Some("2026-08-27"));
        assert!(vencida.recurrencia_vencida(hoy));

        let sin_fin = plantilla(vec!["lunes"], None);
        assert!(!sin_fin.recurrencia_vencida(hoy));

        // 마지막 날 당일까지는 유효
        let ultimo_dia = plantilla(vec!["lunes"], Some("2026-08-28"));
        assert!(!ultimo_dia.recurrencia_vencida(hoy));
    }

    #[test]
    fn test_recurrencia_vencida_fecha_corrupta() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let corrupta = plantilla(vec!["lunes"], Some("no-es-fecha"));

        assert!(corrupta.recurrencia_vencida(hoy));
    }

    #[test]
    fn test_recurrencia_por_vencer_window() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

        // 정확히 3일 남음 → 윈도우 안
        let tres_dias = plantilla(vec!["lunes"], Some("2026-08-31"));
        assert!(tres_dias.recurrencia_por_vencer(hoy, 3));

        // 1일 남음 → 윈도우 안
        let un_dia = plantilla(vec!["lunes"], Some("2026-08-29"));
        assert!(un_dia.recurrencia_por_vencer(hoy, 3));

        // 오늘이 마지막 날 → 윈도우 밖 (0일)
        let hoy_mismo = plantilla(vec!["lunes"], Some("2026-08-28"));
        assert!(!hoy_mismo.recurrencia_por_vencer(hoy, 3));

        // 4일 남음 → 윈도우 밖
        let cuatro_dias = plantilla(vec!["lunes"], Some("2026-09-01"));
        assert!(!cuatro_dias.recurrencia_por_vencer(hoy, 3));
    }

    #[test]
    fn test_recurrencia_por_vencer_ya_avisado() {
        let hoy = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
        let mut menu = plantilla(vec!["lunes"], Some("2026-08-31"));
        menu.aviso_enviado = true;

        assert!(!menu.recurrencia_por_vencer(hoy, 3));
    }

    #[test]
    fn test_stock_bajo() {
        let mut menu = plantilla(vec!["lunes"], None);

        menu.stock_disponible = 3;
        assert!(menu.stock_bajo(5));

        menu.stock_disponible = 5;
        assert!(menu.stock_bajo(5));

        menu.stock_disponible = 6;
        assert!(!menu.stock_bajo(5));

        // 품절은 재고 부족 알림 대상이 아님
        menu.stock_disponible = 0;
        assert!(!menu.stock_bajo(5));
    }

    #[test]
    fn test_materializar_copies_fields_and_resets_stock() {
        let mut origen = plantilla(vec!["lunes"], Some("2026-12-31"));
        origen.id = Some(ObjectId::new());
        origen.stock_disponible = 2;

        let copia = origen.materializar("2026-08-31");

        assert_eq!(copia.plato, origen.plato);
        assert_eq!(copia.cafeteria_id, origen.cafeteria_id);
        assert_eq!(copia.fecha.as_deref(), Some("2026-08-31"));
        assert_eq!(copia.stock_disponible, origen.stock_total);
        assert!(!copia.es_recurrente);
        assert!(copia.dias_semana.is_empty());
        assert_eq!(copia.menu_origen_id, origen.id);
        assert!(copia.id.is_none());
    }
}
