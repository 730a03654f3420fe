//! 알림 팬아웃 서비스 구현
//!
//! 재고 부족과 반복 메뉴 만료 임박 이벤트를 인앱 알림(+필요 시 이메일)으로
//! 전파합니다. 수신 대상은 사용자의 알림 수신 설정을 존중합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::entities::menus::Menu,
    domain::entities::notificaciones::{Notificacion, TipoNotificacion},
    repositories::{notificaciones::NotificacionRepository, users::UserRepository},
    services::notifications::EmailService,
};

/// 알림 팬아웃 서비스
pub struct NotificationService {
    notificacion_repository: Arc<NotificacionRepository>,
    user_repository: Arc<UserRepository>,
    email_service: Arc<EmailService>,
}

impl NotificationService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| NotificationService {
            notificacion_repository: NotificacionRepository::instance(),
            user_repository: UserRepository::instance(),
            email_service: EmailService::instance(),
        })
    }

    /// 재고 부족 팬아웃
    ///
    /// `avisos_stock=true`로 설정한 활성 구매자 전원에게 인앱 알림을
    /// 만들고 이메일을 발송합니다. 이메일 실패는 인앱 알림을 막지
    /// 않습니다.
    pub async fn notificar_stock_bajo(&self, menu: &Menu) -> AppResult<u64> {
        let destinatarios = self.user_repository.find_opted_in_stock_alerts().await?;

        let titulo = "Quedan pocas unidades".to_string();
        let mensaje = format!(
            "{} ({}): {} unidades restantes",
            menu.plato, menu.nombre_cafeteria, menu.stock_disponible
        );

        let mut notificaciones: Vec<Notificacion> = Vec::new();

        for user in destinatarios {
            let Some(user_id) = user.id else { continue };

            let mut noti = Notificacion::new(
                user_id,
                TipoNotificacion::StockBajo,
                titulo.clone(),
                mensaje.clone(),
                menu.id,
            );

            if user.quiere_aviso_stock() {
                match self.email_service.send(&user.email, &titulo, &mensaje).await {
                    Ok(()) => noti.email_enviado = true,
                    Err(e) => log::error!("재고 부족 이메일 실패 (to={}): {}", user.email, e),
                }
            }

            notificaciones.push(noti);
        }

        let creadas = self.notificacion_repository.create_many(&notificaciones).await?;

        log::info!(
            "📣 재고 부족 팬아웃: menu={} destinatarios={}",
            menu.plato,
            creadas
        );

        Ok(creadas)
    }

    /// 반복 메뉴 만료 임박 알림
    ///
    /// 해당 카페테리아 소속 계정들에게 인앱 알림을 만들고, 수신 설정이
    /// 켜진 계정에는 이메일도 발송합니다. 이메일 실패는 인앱 알림을
    /// 막지 않습니다.
    pub async fn notificar_recurrencia_por_vencer(&self, menu: &Menu) -> AppResult<u64> {
        let destinatarios = self
            .user_repository
            .find_by_cafeteria(&menu.cafeteria_id)
            .await?;

        let fin = menu.fecha_fin_recurrencia.as_deref().unwrap_or("?");
        let titulo = "Menú recurrente a punto de expirar".to_string();
        let mensaje = format!(
            "La recurrencia de \"{}\" termina el {}. Renuévala si quieres seguir publicándolo.",
            menu.plato, fin
        );

        let mut creadas: u64 = 0;

        for user in destinatarios {
            let Some(user_id) = user.id else { continue };

            let mut noti = Notificacion::new(
                user_id,
                TipoNotificacion::RecurrenciaPorVencer,
                titulo.clone(),
                mensaje.clone(),
                menu.id,
            );

            if user.quiere_aviso_recurrencia() {
                match self.email_service.send(&user.email, &titulo, &mensaje).await {
                    Ok(()) => noti.email_enviado = true,
                    Err(e) => log::error!("만료 임박 이메일 실패 (to={}): {}", user.email, e),
                }
            }

            self.notificacion_repository.create(noti).await?;
            creadas += 1;
        }

        Ok(creadas)
    }

    /// 사용자별 알림 목록 조회 (최신순)
    pub async fn listar(&self, user_id: &str, limit: i64) -> AppResult<Vec<Notificacion>> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        self.notificacion_repository
            .find_by_user(&user_oid, limit)
            .await
    }

    /// 알림 읽음 처리 (본인 소유만)
    pub async fn marcar_leida(&self, user_id: &str, notificacion_id: &str) -> AppResult<()> {
        let user_oid = ObjectId::parse_str(user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let updated = self
            .notificacion_repository
            .mark_leida(notificacion_id, &user_oid)
            .await?;

        if !updated {
            return Err(AppError::NotFound("알림을 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }
}

#[async_trait]
impl Service for NotificationService {
    fn name(&self) -> &str {
        "notification_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn notification_service_construct() -> Arc<dyn Service> {
    NotificationService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "notification_service",
        construct: notification_service_construct,
    }
}
