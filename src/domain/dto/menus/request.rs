//! 메뉴 요청 DTO
//!
//! 메뉴 생성/수정과 예약 요청의 입력 검증을 정의합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::time_utils;

/// 메뉴 생성 요청 DTO
///
/// `es_recurrente=true`이면 `dias_semana`가 필수이고 `fecha`는 비워야 합니다.
/// 일일 메뉴는 그 반대입니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_recurrencia"))]
pub struct CreateMenuRequest {
    /// 요리 이름
    #[validate(length(min = 1, max = 120, message = "요리 이름은 1-120자 사이여야 합니다"))]
    pub plato: String,

    /// 요리 설명 (선택)
    pub descripcion: Option<String>,

    /// 가격 (EUR)
    #[validate(custom(function = "validate_precio"))]
    pub precio: f64,

    /// 준비 수량
    #[validate(range(min = 1, message = "준비 수량은 1 이상이어야 합니다"))]
    pub stock_total: i32,

    /// 판매 날짜 "YYYY-MM-DD" (일일 메뉴만)
    pub fecha: Option<String>,

    /// 반복 템플릿 여부
    #[serde(default)]
    pub es_recurrente: bool,

    /// 반복 요일 (스페인어 소문자)
    #[serde(default)]
    pub dias_semana: Vec<String>,

    /// 반복 종료 날짜 "YYYY-MM-DD" (선택)
    pub fecha_fin_recurrencia: Option<String>,
}

/// 재고 수정 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStockRequest {
    /// 새 남은 수량
    #[validate(range(min = 0, message = "재고는 0 이상이어야 합니다"))]
    pub stock_disponible: i32,
}

/// 메뉴 예약 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservarRequest {
    /// 예약 수량
    #[validate(range(min = 1, message = "예약 수량은 1 이상이어야 합니다"))]
    pub cantidad: i32,
}

const DIAS_VALIDOS: [&str; 7] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

/// 반복/일일 메뉴의 상호 배타 조건과 날짜 형식을 검증
fn validate_recurrencia(req: &CreateMenuRequest) -> Result<(), ValidationError> {
    if req.es_recurrente {
        if req.fecha.is_some() {
            return Err(ValidationError::new("recurrente_con_fecha")
                .with_message("반복 템플릿은 fecha를 가질 수 없습니다".into()));
        }
        if req.dias_semana.is_empty() {
            return Err(ValidationError::new("dias_semana_vacio")
                .with_message("반복 템플릿은 dias_semana가 필요합니다".into()));
        }
        for dia in &req.dias_semana {
            if !DIAS_VALIDOS.contains(&dia.as_str()) {
                return Err(ValidationError::new("dia_invalido")
                    .with_message(format!("유효하지 않은 요일입니다: {}", dia).into()));
            }
        }
        if let Some(fin) = &req.fecha_fin_recurrencia {
            if time_utils::parse_fecha(fin).is_none() {
                return Err(ValidationError::new("fecha_fin_invalida")
                    .with_message("fecha_fin_recurrencia는 YYYY-MM-DD 형식이어야 합니다".into()));
            }
        }
    } else {
        match &req.fecha {
            None => {
                return Err(ValidationError::new("fecha_requerida")
                    .with_message("일일 메뉴는 fecha가 필요합니다".into()));
            }
            Some(fecha) if time_utils::parse_fecha(fecha).is_none() => {
                return Err(ValidationError::new("fecha_invalida")
                    .with_message("fecha는 YYYY-MM-DD 형식이어야 합니다".into()));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// 가격 검증 (양수, 센트 단위까지)
fn validate_precio(precio: f64) -> Result<(), ValidationError> {
    if precio <= 0.0 || !precio.is_finite() {
        return Err(ValidationError::new("precio_invalido")
            .with_message("가격은 0보다 커야 합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateMenuRequest {
        CreateMenuRequest {
            plato: "Paella de verduras".to_string(),
            descripcion: None,
            precio: 3.50,
            stock_total: 20,
            fecha: None,
            es_recurrente: true,
            dias_semana: vec!["lunes".to_string(), "miercoles".to_string()],
            fecha_fin_recurrencia: Some("2026-12-31".to_string()),
        }
    }

    #[test]
    fn test_recurrente_valido() {
        assert!(base_request().validate().is_ok());
    }

    #[test]
    fn test_recurrente_sin_dias_falla() {
        let mut req = base_request();
        req.dias_semana.clear();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_dia_invalido_falla() {
        let mut req = base_request();
        req.dias_semana = vec!["monday".to_string()];

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_diario_requiere_fecha() {
        let mut req = base_request();
        req.es_recurrente = false;
        req.dias_semana.clear();
        req.fecha_fin_recurrencia = None;

        assert!(req.validate().is_err());

        req.fecha = Some("2026-08-31".to_string());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_precio_no_positivo_falla() {
        let mut req = base_request();
        req.precio = 0.0;

        assert!(req.validate().is_err());
    }
}
