//! 배치 작업(반복 메뉴, 재고 알림) 설정 관리 모듈
//!
//! 스케줄러 주기, 스캔 배치 크기, 만료 알림 윈도우, 재고 임계값 등
//! 일일 배치 작업의 동작 파라미터를 제공합니다.

use std::env;

/// 반복 메뉴 관련 작업 설정
pub struct RecurrenceConfig;

impl RecurrenceConfig {
    /// 만료 알림을 보내기 시작하는 남은 일수를 반환합니다.
    ///
    /// `fecha_fin_recurrencia`가 1일에서 이 값(기본 3일) 사이로 남은
    /// 반복 메뉴가 알림 대상이 됩니다.
    pub fn dias_aviso_expiracion() -> i64 {
        env::var("RECURRENCE_AVISO_DIAS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3)
    }

    /// 한 번의 스캔에서 조회할 최근 메뉴 수를 반환합니다.
    ///
    /// # 기본값
    ///
    /// 500
    pub fn lote_escaneo() -> i64 {
        env::var("RECURRENCE_SCAN_LIMIT")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .unwrap_or(500)
    }

    /// 스케줄러 틱 간격(초)을 반환합니다.
    ///
    /// 틱마다 작업이 실행되는 것은 아니고, Redis의 일자별 가드 키로
    /// 하루 한 번만 실제 실행됩니다.
    ///
    /// # 기본값
    ///
    /// 3600초 (1시간)
    pub fn intervalo_segundos() -> u64 {
        env::var("JOBS_INTERVAL_SECONDS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .unwrap_or(3600)
    }
}

/// 재고 알림 설정
pub struct StockConfig;

impl StockConfig {
    /// 재고 부족 알림을 트리거하는 임계값을 반환합니다.
    ///
    /// 오늘 날짜 메뉴의 `stock_disponible`이 1 이상이면서 이 값 이하면
    /// 알림 대상이 됩니다.
    ///
    /// # 기본값
    ///
    /// 5
    pub fn umbral_stock_bajo() -> i32 {
        env::var("STOCK_LOW_THRESHOLD")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recurrence_defaults() {
        if env::var("RECURRENCE_AVISO_DIAS").is_err() {
            assert_eq!(RecurrenceConfig::dias_aviso_expiracion(), 3);
        }

        if env::var("RECURRENCE_SCAN_LIMIT").is_err() {
            assert_eq!(RecurrenceConfig::lote_escaneo(), 500);
        }

        if env::var("JOBS_INTERVAL_SECONDS").is_err() {
            assert_eq!(RecurrenceConfig::intervalo_segundos(), 3600);
        }
    }

    #[test]
    fn test_stock_threshold_default() {
        if env::var("STOCK_LOW_THRESHOLD").is_err() {
            assert_eq!(StockConfig::umbral_stock_bajo(), 5);
        }
    }
}
