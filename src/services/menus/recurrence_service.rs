//! 반복 메뉴 실체화 및 만료 알림 서비스 구현
//!
//! 스케줄러와 관리자 수동 트리거 양쪽에서 호출되는 두 작업을 담당합니다.
//!
//! 1. **실체화**: 오늘 요일에 해당하는 반복 템플릿을 오늘 날짜의 일일
//!    메뉴 사본으로 복제합니다. 멱등성은 유니크 부분 인덱스가 보장합니다.
//! 2. **만료 알림**: 종료일이 알림 윈도우(기본 1~3일)에 들어온 템플릿의
//!    카페테리아에 이메일/인앱 알림을 보냅니다. `aviso_enviado` 플래그의
//!    조건부 업데이트로 at-most-once를 보장합니다.

use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    config::RecurrenceConfig,
    core::errors::AppResult,
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::dto::menus::MaterializacionResumen,
    repositories::menus::MenuRepository,
    services::notifications::NotificationService,
    utils::time_utils,
};

/// 반복 메뉴 실체화/만료 알림 서비스
pub struct RecurrenceService {
    menu_repository: Arc<MenuRepository>,
    notification_service: Arc<NotificationService>,
}

impl RecurrenceService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| RecurrenceService {
            menu_repository: MenuRepository::instance(),
            notification_service: NotificationService::instance(),
        })
    }

    /// 오늘 날짜의 반복 템플릿 실체화
    ///
    /// 같은 날 여러 번 호출되어도 안전합니다. 이미 실체화된 템플릿의
    /// 삽입은 duplicate key로 거부되어 `omitidos`로 집계됩니다.
    pub async fn materializar_hoy(&self) -> AppResult<MaterializacionResumen> {
        let hoy = time_utils::hoy();
        let fecha = time_utils::hoy_fecha();
        let dia_semana = time_utils::hoy_dia_semana();

        let plantillas = self
            .menu_repository
            .find_plantillas_recurrentes(RecurrenceConfig::lote_escaneo())
            .await?;

        let mut creados: u64 = 0;
        let mut omitidos: u64 = 0;

        for plantilla in plantillas {
            if plantilla.recurrencia_vencida(hoy) || !plantilla.aplica_hoy(dia_semana) {
                continue;
            }

            let copia = plantilla.materializar(&fecha);

            if self.menu_repository.create_materializado(&copia).await? {
                creados += 1;
            } else {
                omitidos += 1;
            }
        }

        log::info!(
            "🍽️ 실체화 완료: fecha={} creados={} omitidos={}",
            fecha,
            creados,
            omitidos
        );

        Ok(MaterializacionResumen {
            fecha,
            creados,
            omitidos,
        })
    }

    /// 만료 임박 반복 템플릿 알림 발송
    ///
    /// 알림 윈도우는 종료일까지 남은 일수가 1 이상
    /// `RecurrenceConfig::dias_aviso_expiracion()` 이하인 구간입니다.
    /// 플래그 선점에 성공한 실행만 알림을 보내므로 동시 실행에서도
    /// 템플릿당 이메일은 한 통만 나갑니다. 팬아웃이 실패하면 플래그를
    /// 되돌려 다음 스캔이 재시도합니다.
    pub async fn notificar_expiraciones(&self) -> AppResult<u64> {
        let hoy = time_utils::hoy();
        let dias_aviso = RecurrenceConfig::dias_aviso_expiracion();

        let candidatos = self
            .menu_repository
            .find_plantillas_sin_aviso(RecurrenceConfig::lote_escaneo())
            .await?;

        let mut avisados: u64 = 0;

        for plantilla in candidatos {
            if !plantilla.recurrencia_por_vencer(hoy, dias_aviso) {
                continue;
            }

            let Some(menu_id) = plantilla.id else {
                continue;
            };

            // 플래그 선점에 실패하면 다른 실행이 이미 알림을 보낸 것
            if !self.menu_repository.mark_aviso_enviado(&menu_id).await? {
                continue;
            }

            if let Err(e) = self
                .notification_service
                .notificar_recurrencia_por_vencer(&plantilla)
                .await
            {
                log::error!(
                    "만료 임박 알림 발송 실패 (menu={}): {}",
                    menu_id.to_hex(),
                    e
                );

                // 선점한 플래그를 되돌려 다음 스캔이 재시도하게 한다
                if let Err(e) = self.menu_repository.clear_aviso_enviado(&menu_id).await {
                    log::error!(
                        "aviso 플래그 복구 실패 (menu={}): {}",
                        menu_id.to_hex(),
                        e
                    );
                }

                continue;
            }

            avisados += 1;
        }

        log::info!("⏰ 만료 임박 알림 완료: avisados={}", avisados);

        Ok(avisados)
    }
}

#[async_trait]
impl Service for RecurrenceService {
    fn name(&self) -> &str {
        "recurrence_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn recurrence_service_construct() -> Arc<dyn Service> {
    RecurrenceService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "recurrence_service",
        construct: recurrence_service_construct,
    }
}
