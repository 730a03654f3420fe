//! 백그라운드 잡 스케줄러
//!
//! 반복 메뉴 실체화, 만료 임박 알림 스캔, 재고 부족 스캔을 주기적으로
//! 실행합니다.
//! 각 잡은 날짜별 Redis 가드 키로 하루 한 번만 실행되며, 인스턴스가
//! 여러 개 떠 있어도 같은 날 중복 실행되지 않습니다.
//!
//! 잡의 멱등성은 스케줄러가 아니라 저장 계층이 보장합니다
//! (부분 유니크 인덱스, `aviso_enviado` 플래그의 원자적 선점).
//! Redis 가드는 불필요한 재실행을 줄이는 역할만 합니다.

use std::time::Duration;

use crate::caching::redis::RedisClient;
use crate::config::RecurrenceConfig;
use crate::core::registry::ServiceLocator;
use crate::services::menus::{MenuService, RecurrenceService};
use crate::utils::time_utils;

/// 가드 키 TTL (48시간, 자정 경계를 넉넉히 넘김)
const GUARD_TTL_SECONDS: usize = 172_800;

/// 스케줄러 루프를 백그라운드 태스크로 시작합니다.
///
/// 서버 기동 시 한 번 호출하며, 루프는 프로세스와 함께 종료됩니다.
pub fn spawn() {
    tokio::spawn(async {
        run_loop().await;
    });
}

async fn run_loop() {
    let intervalo = RecurrenceConfig::intervalo_segundos();
    let mut interval = tokio::time::interval(Duration::from_secs(intervalo));

    log::info!("⏰ 스케줄러 시작 (주기 {}초)", intervalo);

    loop {
        interval.tick().await;
        ejecutar_jobs_diarios().await;
    }
}

/// 하루 한 번 실행 잡들을 순서대로 시도합니다.
///
/// 실체화가 먼저 돌아야 당일 메뉴가 게시된 뒤 알림 스캔이 이어집니다.
async fn ejecutar_jobs_diarios() {
    let fecha = time_utils::hoy_fecha();

    if reclamar_guard("materializacion", &fecha).await {
        match RecurrenceService::instance().materializar_hoy().await {
            Ok(resumen) => log::info!(
                "🍽️ 실체화 잡 완료: fecha={} creados={} omitidos={}",
                resumen.fecha,
                resumen.creados,
                resumen.omitidos
            ),
            Err(e) => {
                log::error!("❌ 실체화 잡 실패: {}", e);
                liberar_guard("materializacion", &fecha).await;
            }
        }
    }

    if reclamar_guard("expiraciones", &fecha).await {
        match RecurrenceService::instance().notificar_expiraciones().await {
            Ok(notificados) => {
                log::info!("⏰ 만료 임박 스캔 완료: notificados={}", notificados)
            }
            Err(e) => {
                log::error!("❌ 만료 임박 스캔 실패: {}", e);
                liberar_guard("expiraciones", &fecha).await;
            }
        }
    }

    if reclamar_guard("stock_bajo", &fecha).await {
        match MenuService::instance().escanear_stock_bajo().await {
            Ok(notificados) => {
                log::info!("📦 재고 부족 스캔 완료: notificados={}", notificados)
            }
            Err(e) => {
                log::error!("❌ 재고 부족 스캔 실패: {}", e);
                liberar_guard("stock_bajo", &fecha).await;
            }
        }
    }
}

fn guard_key(job: &str, fecha: &str) -> String {
    format!("jobs:{}:{}", job, fecha)
}

/// 날짜별 가드 키 선점을 시도합니다.
///
/// Redis 장애 시에는 실행을 허용합니다 (잡 자체가 멱등하므로 안전).
async fn reclamar_guard(job: &str, fecha: &str) -> bool {
    let redis = ServiceLocator::get::<RedisClient>();
    let key = guard_key(job, fecha);

    match redis.get::<String>(&key).await {
        Ok(Some(_)) => false,
        Ok(None) => {
            if let Err(e) = redis
                .set_with_expiry(&key, &"done".to_string(), GUARD_TTL_SECONDS)
                .await
            {
                log::warn!("가드 키 기록 실패 ({}): {}", key, e);
            }
            true
        }
        Err(e) => {
            log::warn!("가드 키 조회 실패 ({}): {}", key, e);
            true
        }
    }
}

/// 잡 실패 시 가드를 풀어 다음 tick에 재시도하게 합니다.
async fn liberar_guard(job: &str, fecha: &str) {
    let redis = ServiceLocator::get::<RedisClient>();
    let key = guard_key(job, fecha);

    if let Err(e) = redis.del(&key).await {
        log::warn!("가드 키 해제 실패 ({}): {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_key_format() {
        assert_eq!(
            guard_key("materializacion", "2026-08-28"),
            "jobs:materializacion:2026-08-28"
        );
    }
}
