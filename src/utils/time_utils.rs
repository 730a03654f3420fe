//! 날짜/요일 처리 유틸리티
//!
//! 메뉴 날짜 필드는 전부 "YYYY-MM-DD" 문자열로 저장되므로,
//! 파싱/포맷과 스페인어 요일 이름 변환을 이 모듈에 모아둡니다.

use chrono::{Datelike, Local, NaiveDate, Weekday};

/// 메뉴 날짜 필드에 사용하는 포맷
pub const FECHA_FORMAT: &str = "%Y-%m-%d";

/// `chrono::Weekday`를 스페인어 요일 이름으로 변환합니다
///
/// 반복 메뉴의 `dias_semana` 필드와 매칭할 때 사용됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(weekday_es(chrono::Weekday::Mon), "lunes");
/// ```
pub fn weekday_es(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miercoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sabado",
        Weekday::Sun => "domingo",
    }
}

/// 오늘 날짜를 반환합니다 (서버 로컬 타임존 기준)
pub fn hoy() -> NaiveDate {
    Local::now().date_naive()
}

/// 오늘 날짜를 "YYYY-MM-DD" 문자열로 반환합니다
pub fn hoy_fecha() -> String {
    hoy().format(FECHA_FORMAT).to_string()
}

/// 오늘의 스페인어 요일 이름을 반환합니다
pub fn hoy_dia_semana() -> &'static str {
    weekday_es(hoy().weekday())
}

/// "YYYY-MM-DD" 문자열을 `NaiveDate`로 파싱합니다
///
/// 포맷이 맞지 않으면 `None`을 반환합니다. 저장된 데이터의 날짜 필드가
/// 손상된 경우에도 배치 작업이 중단되지 않도록 Result 대신 Option을 사용합니다.
pub fn parse_fecha(fecha: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(fecha, FECHA_FORMAT).ok()
}

/// 기준일부터 대상 날짜까지 남은 일수를 계산합니다
///
/// 대상 날짜가 과거이면 음수를 반환하고, 파싱 실패 시 `None`을 반환합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let hoy = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();
/// assert_eq!(dias_hasta(hoy, "2026-08-31"), Some(3));
/// ```
pub fn dias_hasta(desde: NaiveDate, fecha: &str) -> Option<i64> {
    parse_fecha(fecha).map(|f| (f - desde).num_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_es_all_days() {
        assert_eq!(weekday_es(Weekday::Mon), "lunes");
        assert_eq!(weekday_es(Weekday::Tue), "martes");
        assert_eq!(weekday_es(Weekday::Wed), "miercoles");
        assert_eq!(weekday_es(Weekday::Thu), "jueves");
        assert_eq!(weekday_es(Weekday::Fri), "viernes");
        assert_eq!(weekday_es(Weekday::Sat), "sabado");
        assert_eq!(weekday_es(Weekday::Sun), "domingo");
    }

    #[test]
    fn test_parse_fecha_valid() {
        let fecha = parse_fecha("2026-08-28").unwrap();
        assert_eq!(fecha, NaiveDate::from_ymd_opt(2026, 8, 28).unwrap());
    }

    #[test]
    fn test_parse_fecha_invalid() {
        assert!(parse_fecha("28/08/2026").is_none());
        assert!(parse_fecha("no es fecha").is_none());
        assert!(parse_fecha("").is_none());
    }

    #[test]
    fn test_dias_hasta() {
        let desde = NaiveDate::from_ymd_opt(2026, 8, 28).unwrap();

        assert_eq!(dias_hasta(desde, "2026-08-31"), Some(3));
        assert_eq!(dias_hasta(desde, "2026-08-28"), Some(0));
        assert_eq!(dias_hasta(desde, "2026-08-25"), Some(-3));
        assert_eq!(dias_hasta(desde, "invalid"), None);
    }

    #[test]
    fn test_hoy_fecha_format() {
        let fecha = hoy_fecha();
        assert!(parse_fecha(&fecha).is_some());
    }
}
