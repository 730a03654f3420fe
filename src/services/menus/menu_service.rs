//! 메뉴 관리 서비스 구현
//!
//! 메뉴 생성/조회/재고 관리와 직접 예약(결제 없는 수령)을 담당합니다.
//! 재고 차감은 항상 리포지토리의 원자적 조건부 업데이트를 경유하며,
//! 차감 후 임계값 이하로 떨어지면 재고 부족 팬아웃을 트리거합니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::doc;

use crate::{
    config::{RecurrenceConfig, StockConfig},
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::dto::menus::{CreateMenuRequest, ReservarRequest, UpdateStockRequest},
    domain::entities::cafeterias::EstadoOnboarding,
    domain::entities::menus::Menu,
    domain::entities::reservas::Reserva,
    domain::models::auth::AuthenticatedUser,
    repositories::{
        cafeterias::CafeteriaRepository, menus::MenuRepository, reservas::ReservaRepository,
    },
    services::notifications::NotificationService,
    utils::time_utils,
};

/// 메뉴 관리 서비스
pub struct MenuService {
    menu_repository: Arc<MenuRepository>,
    reserva_repository: Arc<ReservaRepository>,
    cafeteria_repository: Arc<CafeteriaRepository>,
    notification_service: Arc<NotificationService>,
}

impl MenuService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| MenuService {
            menu_repository: MenuRepository::instance(),
            reserva_repository: ReservaRepository::instance(),
            cafeteria_repository: CafeteriaRepository::instance(),
            notification_service: NotificationService::instance(),
        })
    }

    /// 새 메뉴 생성 (cafeteria 역할 전용)
    ///
    /// 온보딩을 완료(contrato_generado)한 카페테리아만 메뉴를 게시할 수
    /// 있습니다.
    pub async fn create_menu(
        &self,
        user: &AuthenticatedUser,
        request: CreateMenuRequest,
    ) -> AppResult<Menu> {
        let cafeteria_id = user.cafeteria_id.as_deref().ok_or_else(|| {
            AppError::AuthorizationError("카페테리아 소속 계정이 아닙니다".to_string())
        })?;

        let cafeteria = self
            .cafeteria_repository
            .find_by_id(cafeteria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("카페테리아를 찾을 수 없습니다".to_string()))?;

        if cafeteria.estado_onboarding != EstadoOnboarding::ContratoGenerado {
            return Err(AppError::ConflictError(
                "온보딩이 완료되지 않은 카페테리아입니다".to_string(),
            ));
        }

        let cafeteria_oid = cafeteria
            .id
            .ok_or_else(|| AppError::InternalError("카페테리아 ID가 없습니다".to_string()))?;

        let mut menu = if request.es_recurrente {
            Menu::new_recurrente(
                cafeteria_oid,
                cafeteria.nombre.clone(),
                cafeteria.campus.clone(),
                request.plato,
                request.precio,
                request.stock_total,
                request.dias_semana,
                request.fecha_fin_recurrencia,
            )
        } else {
            let fecha = request
                .fecha
                .ok_or_else(|| AppError::ValidationError("fecha가 필요합니다".to_string()))?;

            Menu::new_diario(
                cafeteria_oid,
                cafeteria.nombre.clone(),
                cafeteria.campus.clone(),
                request.plato,
                request.precio,
                request.stock_total,
                fecha,
            )
        };
        menu.descripcion = request.descripcion;

        self.menu_repository.create(menu).await
    }

    /// ID로 메뉴 조회
    pub async fn get_menu(&self, id: &str) -> AppResult<Menu> {
        self.menu_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))
    }

    /// 날짜별 메뉴 목록 조회 (기본값: 오늘, campus 필터 선택)
    pub async fn listar_por_fecha(
        &self,
        fecha: Option<String>,
        campus: Option<String>,
    ) -> AppResult<Vec<Menu>> {
        let fecha = match fecha {
            Some(f) => {
                time_utils::parse_fecha(&f).ok_or_else(|| {
                    AppError::ValidationError("fecha는 YYYY-MM-DD 형식이어야 합니다".to_string())
                })?;
                f
            }
            None => time_utils::hoy_fecha(),
        };

        self.menu_repository
            .find_by_fecha(&fecha, campus.as_deref())
            .await
    }

    /// 당일 재고 부족 메뉴 일괄 스캔 (스케줄러/관리자 트리거)
    ///
    /// 오늘자 메뉴 중 재고가 임계값 이하인 것들에 대해 팬아웃을 실행하고
    /// 생성된 알림 수를 반환합니다. 메뉴 하나의 실패가 배치를 중단시키지
    /// 않습니다.
    pub async fn escanear_stock_bajo(&self) -> AppResult<u64> {
        let fecha = time_utils::hoy_fecha();
        let umbral = StockConfig::umbral_stock_bajo();
        let lote = RecurrenceConfig::lote_escaneo();

        let menus = self
            .menu_repository
            .find_stock_bajo(&fecha, umbral, lote)
            .await?;

        let mut creadas: u64 = 0;

        for menu in &menus {
            match self.notification_service.notificar_stock_bajo(menu).await {
                Ok(n) => creadas += n,
                Err(e) => log::error!("재고 부족 팬아웃 실패 (menu={}): {}", menu.plato, e),
            }
        }

        log::info!(
            "📦 재고 스캔 완료: fecha={} menus={} notificaciones={}",
            fecha,
            menus.len(),
            creadas
        );

        Ok(creadas)
    }

    /// 소속 카페테리아의 메뉴 목록 조회
    pub async fn listar_por_cafeteria(&self, cafeteria_id: &str) -> AppResult<Vec<Menu>> {
        self.menu_repository.find_by_cafeteria(cafeteria_id).await
    }

    /// 재고 수동 조정 (소유 카페테리아만)
    pub async fn update_stock(
        &self,
        user: &AuthenticatedUser,
        menu_id: &str,
        request: UpdateStockRequest,
    ) -> AppResult<Menu> {
        let menu = self.get_menu(menu_id).await?;
        self.verificar_propiedad(user, &menu)?;

        let updated = self
            .menu_repository
            .update(
                menu_id,
                doc! {
                    "stock_disponible": request.stock_disponible,
                    "updated_at": mongodb::bson::DateTime::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()))?;

        self.notificar_si_stock_bajo(&updated).await;

        Ok(updated)
    }

    /// 메뉴 삭제 (소유 카페테리아만)
    pub async fn delete_menu(&self, user: &AuthenticatedUser, menu_id: &str) -> AppResult<()> {
        let menu = self.get_menu(menu_id).await?;
        self.verificar_propiedad(user, &menu)?;

        let deleted = self.menu_repository.delete(menu_id).await?;
        if !deleted {
            return Err(AppError::NotFound("메뉴를 찾을 수 없습니다".to_string()));
        }

        Ok(())
    }

    /// 메뉴 직접 예약 (현장 수령, 결제 프로바이더 없이)
    ///
    /// 재고를 원자적으로 차감한 뒤 예약 기록을 생성합니다.
    /// 재고 부족이면 409를 반환합니다.
    pub async fn reservar(
        &self,
        user: &AuthenticatedUser,
        menu_id: &str,
        request: ReservarRequest,
    ) -> AppResult<Reserva> {
        let user_oid = mongodb::bson::oid::ObjectId::parse_str(&user.user_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let menu = self
            .menu_repository
            .decrementar_stock(menu_id, request.cantidad)
            .await?
            .ok_or_else(|| AppError::ConflictError("재고가 부족합니다".to_string()))?;

        let menu_oid = menu
            .id
            .ok_or_else(|| AppError::InternalError("메뉴 ID가 없습니다".to_string()))?;

        let precio_total = menu.precio * request.cantidad as f64;
        let reserva = Reserva::new_pendiente(user_oid, menu_oid, request.cantidad, precio_total, None);
        let reserva = self.reserva_repository.create(reserva).await?;

        self.notificar_si_stock_bajo(&menu).await;

        Ok(reserva)
    }

    /// 차감 후 재고가 임계값 이하면 팬아웃 트리거
    ///
    /// 알림 실패가 예약 자체를 실패시키지 않도록 에러는 로그로만 남깁니다.
    async fn notificar_si_stock_bajo(&self, menu: &Menu) {
        let umbral = StockConfig::umbral_stock_bajo();

        if menu.stock_bajo(umbral) {
            if let Err(e) = self.notification_service.notificar_stock_bajo(menu).await {
                log::error!("재고 부족 알림 팬아웃 실패: {}", e);
            }
        }
    }

    fn verificar_propiedad(&self, user: &AuthenticatedUser, menu: &Menu) -> AppResult<()> {
        if user.is_admin() {
            return Ok(());
        }

        let propio = user
            .cafeteria_id
            .as_deref()
            .is_some_and(|id| id == menu.cafeteria_id.to_hex());

        if propio {
            Ok(())
        } else {
            Err(AppError::AuthorizationError(
                "이 메뉴에 대한 권한이 없습니다".to_string(),
            ))
        }
    }
}

#[async_trait]
impl Service for MenuService {
    fn name(&self) -> &str {
        "menu_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn menu_service_construct() -> Arc<dyn Service> {
    MenuService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "menu_service",
        construct: menu_service_construct,
    }
}
