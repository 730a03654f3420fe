//! 카페테리아 온보딩 워크플로우 서비스 구현
//!
//! 상태 머신 전이는 엔티티의 `puede_transicionar`로 검증하고, 저장은
//! 현재 상태를 필터에 포함하는 조건부 업데이트로 수행합니다. 허용되지
//! 않는 전이는 409로 거부됩니다. 모든 전이는 감사 로그에 남습니다.
//!
//! ## 이메일 확인 토큰
//!
//! 등록 시 UUID 토큰을 Redis에 24시간 TTL로 저장하고 확인 메일로
//! 전달합니다. 확인 성공 시 토큰은 즉시 삭제됩니다 (1회용).

use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use crate::{
    caching::redis::RedisClient,
    core::errors::{AppError, AppResult},
    core::registry::{Service, ServiceLocator, ServiceRegistration},
    domain::dto::onboarding::{
        ConfirmarEmailRequest, RegistrarCafeteriaRequest, ReferidoResponse, SubirDocumentoRequest,
    },
    domain::entities::cafeterias::{
        Cafeteria, CafeteriaAudit, CafeteriaDocumento, EstadoOnboarding,
    },
    repositories::cafeterias::CafeteriaRepository,
    services::notifications::EmailService,
    services::payments::CheckoutService,
};

/// 허용 문서 크기 상한 (10MB)
const MAX_DOCUMENTO_BYTES: usize = 10 * 1024 * 1024;

/// 허용 문서 MIME 타입
const MIME_PERMITIDOS: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// 이메일 확인 토큰 TTL (24시간)
const TOKEN_TTL_SECONDS: usize = 86400;

/// 문서 페이로드 검증 (MIME 화이트리스트, base64 디코드, 크기 상한)
fn validar_documento(mime_type: &str, contenido_base64: &str) -> AppResult<Vec<u8>> {
    if !MIME_PERMITIDOS.contains(&mime_type) {
        return Err(AppError::ValidationError(format!(
            "허용되지 않는 문서 형식입니다: {}",
            mime_type
        )));
    }

    let contenido = base64::engine::general_purpose::STANDARD
        .decode(contenido_base64)
        .map_err(|_| {
            AppError::ValidationError("contenido_base64가 유효한 base64가 아닙니다".to_string())
        })?;

    if contenido.len() > MAX_DOCUMENTO_BYTES {
        return Err(AppError::ValidationError(
            "문서 크기는 10MB를 초과할 수 없습니다".to_string(),
        ));
    }

    Ok(contenido)
}

/// 카페테리아 온보딩 서비스
pub struct OnboardingService {
    cafeteria_repository: Arc<CafeteriaRepository>,
    email_service: Arc<EmailService>,
    checkout_service: Arc<CheckoutService>,
    redis: Arc<RedisClient>,
}

impl OnboardingService {
    /// 싱글톤 인스턴스를 반환합니다.
    pub fn instance() -> Arc<Self> {
        ServiceLocator::get_or_init(|| OnboardingService {
            cafeteria_repository: CafeteriaRepository::instance(),
            email_service: EmailService::instance(),
            checkout_service: CheckoutService::instance(),
            redis: ServiceLocator::get::<RedisClient>(),
        })
    }

    fn token_key(token: &str) -> String {
        format!("onboarding:token:{}", token)
    }

    /// 상태 전이 공통 경로 (검증 + 조건부 저장)
    async fn transicionar(
        &self,
        cafeteria_id: &str,
        nuevo: EstadoOnboarding,
    ) -> AppResult<Cafeteria> {
        let cafeteria = self
            .cafeteria_repository
            .find_by_id(cafeteria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("카페테리아를 찾을 수 없습니다".to_string()))?;

        let actual = cafeteria.estado_onboarding;

        if !actual.puede_transicionar(nuevo) {
            return Err(AppError::ConflictError(format!(
                "허용되지 않는 온보딩 상태 전이입니다: {} -> {}",
                actual.as_str(),
                nuevo.as_str()
            )));
        }

        // 조건부 업데이트가 실패하면 다른 요청이 먼저 전이시킨 것
        self.cafeteria_repository
            .update_estado(cafeteria_id, actual, nuevo)
            .await?
            .ok_or_else(|| {
                AppError::ConflictError("온보딩 상태가 이미 변경되었습니다".to_string())
            })
    }

    /// 카페테리아 등록 (온보딩 시작)
    ///
    /// 등록 직후 이메일 확인 토큰을 발급하고 확인 메일을 보냅니다.
    /// 메일 발송 실패는 등록을 취소하지 않습니다 (재발송 가능).
    pub async fn registrar(
        &self,
        request: RegistrarCafeteriaRequest,
    ) -> AppResult<Cafeteria> {
        let cafeteria = Cafeteria::new(
            request.nombre,
            request.campus,
            request.email_contacto,
            request.codigo_referido,
        );

        let cafeteria = self.cafeteria_repository.create(cafeteria).await?;

        let cafeteria_id = cafeteria
            .id
            .ok_or_else(|| AppError::InternalError("카페테리아 ID가 없습니다".to_string()))?;

        self.cafeteria_repository
            .append_audit(CafeteriaAudit::new(
                cafeteria_id,
                "registrada".to_string(),
                format!("campus={}", cafeteria.campus),
            ))
            .await?;

        let token = Uuid::new_v4().to_string();
        self.redis
            .set_with_expiry(
                &Self::token_key(&token),
                &cafeteria_id.to_hex(),
                TOKEN_TTL_SECONDS,
            )
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?;

        let asunto = "Confirma tu correo en PlatPal";
        let cuerpo = format!(
            "Hola {},\n\nConfirma tu correo con este código: {}\n\nEl código caduca en 24 horas.",
            cafeteria.nombre, token
        );

        if let Err(e) = self
            .email_service
            .send(&cafeteria.email_contacto, asunto, &cuerpo)
            .await
        {
            log::error!("온보딩 확인 메일 발송 실패 (to={}): {}", cafeteria.email_contacto, e);
        }

        Ok(cafeteria)
    }

    /// 이메일 확인 (registrada → email_verificado)
    pub async fn confirmar_email(
        &self,
        request: ConfirmarEmailRequest,
    ) -> AppResult<Cafeteria> {
        let key = Self::token_key(&request.token);

        let cafeteria_id: String = self
            .redis
            .get(&key)
            .await
            .map_err(|e| AppError::RedisError(e.to_string()))?
            .ok_or_else(|| {
                AppError::ValidationError("유효하지 않거나 만료된 토큰입니다".to_string())
            })?;

        let cafeteria = self
            .transicionar(&cafeteria_id, EstadoOnboarding::EmailVerificado)
            .await?;

        // 1회용 토큰 폐기
        let _ = self.redis.del(&key).await;

        Ok(cafeteria)
    }

    /// KYC 문서 업로드 (email_verificado 이후)
    ///
    /// 첫 문서가 업로드되면 documentos_subidos로 전이하고, 이어서 자동
    /// KYC 검사(현재는 항상 승인하는 스텁)와 계약 생성을 시도합니다.
    /// 자동 체인 실패는 업로드 자체를 취소하지 않으며, admin 엔드포인트로
    /// 수동 재시도할 수 있습니다. 파일 본문은 저장하지 않고 크기/MIME
    /// 검증 후 메타데이터만 남깁니다.
    pub async fn subir_documento(
        &self,
        cafeteria_id: &str,
        request: SubirDocumentoRequest,
    ) -> AppResult<CafeteriaDocumento> {
        let contenido = validar_documento(&request.mime_type, &request.contenido_base64)?;

        let cafeteria = self
            .cafeteria_repository
            .find_by_id(cafeteria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("카페테리아를 찾을 수 없습니다".to_string()))?;

        let estado = cafeteria.estado_onboarding;
        if !matches!(
            estado,
            EstadoOnboarding::EmailVerificado | EstadoOnboarding::DocumentosSubidos
        ) {
            return Err(AppError::ConflictError(format!(
                "현재 온보딩 상태에서는 문서를 업로드할 수 없습니다: {}",
                estado.as_str()
            )));
        }

        let cafeteria_oid = cafeteria
            .id
            .ok_or_else(|| AppError::InternalError("카페테리아 ID가 없습니다".to_string()))?;

        let documento = CafeteriaDocumento::new(
            cafeteria_oid,
            request.nombre_archivo,
            request.mime_type,
            contenido.len() as u64,
        );
        let documento = self.cafeteria_repository.add_documento(documento).await?;

        self.cafeteria_repository
            .append_audit(CafeteriaAudit::new(
                cafeteria_oid,
                "documento_subido".to_string(),
                format!(
                    "archivo={} tipo={} bytes={}",
                    documento.nombre_archivo, documento.mime_type, documento.tamano_bytes
                ),
            ))
            .await?;

        if estado == EstadoOnboarding::EmailVerificado {
            self.transicionar(cafeteria_id, EstadoOnboarding::DocumentosSubidos)
                .await?;

            if let Err(e) = self.avanzar_automaticamente(cafeteria_id).await {
                log::error!(
                    "온보딩 자동 체인 실패 (cafeteria={}): {}",
                    cafeteria_id,
                    e
                );
            }
        }

        Ok(documento)
    }

    /// 문서 업로드 후 자동 진행 체인 (KYC 스텁 승인 → 계약 생성)
    ///
    /// KYC 검사는 현재 문서 존재 여부만 확인하는 스텁이며 항상
    /// 승인합니다.
    async fn avanzar_automaticamente(&self, cafeteria_id: &str) -> AppResult<()> {
        self.aprobar_kyc(cafeteria_id).await?;
        self.generar_contrato(cafeteria_id).await?;

        Ok(())
    }

    /// KYC 승인 (documentos_subidos → kyc_aprobado, admin 전용)
    pub async fn aprobar_kyc(&self, cafeteria_id: &str) -> AppResult<Cafeteria> {
        let oid = ObjectId::parse_str(cafeteria_id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        if self.cafeteria_repository.count_documentos(&oid).await? == 0 {
            return Err(AppError::ConflictError(
                "업로드된 문서가 없어 KYC를 승인할 수 없습니다".to_string(),
            ));
        }

        self.transicionar(cafeteria_id, EstadoOnboarding::KycAprobado)
            .await
    }

    /// 계약 생성 (kyc_aprobado → contrato_generado)
    ///
    /// Stripe Connect 연결 계정을 발급하여 정산 준비를 마치고, 계약
    /// 확정 메일을 보냅니다. 메일 실패는 전이를 취소하지 않습니다.
    pub async fn generar_contrato(&self, cafeteria_id: &str) -> AppResult<Cafeteria> {
        let cafeteria = self
            .transicionar(cafeteria_id, EstadoOnboarding::ContratoGenerado)
            .await?;

        let cuenta = self
            .checkout_service
            .create_connect_account(cafeteria_id)
            .await?;

        let oid = cafeteria
            .id
            .ok_or_else(|| AppError::InternalError("카페테리아 ID가 없습니다".to_string()))?;

        self.cafeteria_repository
            .append_audit(CafeteriaAudit::new(
                oid,
                "contrato_generado".to_string(),
                format!("stripe_account={}", cuenta.account_id),
            ))
            .await?;

        let asunto = "Tu contrato con PlatPal está listo";
        let cuerpo = format!(
            "Hola {},\n\nTu contrato ha sido generado y tu cuenta de cobros está activa.\nYa puedes publicar menús en PlatPal.",
            cafeteria.nombre
        );

        if let Err(e) = self
            .email_service
            .send(&cafeteria.email_contacto, asunto, &cuerpo)
            .await
        {
            log::error!("계약 메일 발송 실패 (to={}): {}", cafeteria.email_contacto, e);
        }

        // 최신 상태(계정 ID 포함) 반환
        self.cafeteria_repository
            .find_by_id(cafeteria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("카페테리아를 찾을 수 없습니다".to_string()))
    }

    /// 온보딩 거절 (terminal, admin 전용)
    pub async fn rechazar(&self, cafeteria_id: &str, motivo: &str) -> AppResult<Cafeteria> {
        let cafeteria = self
            .transicionar(cafeteria_id, EstadoOnboarding::Rechazada)
            .await?;

        if let Some(oid) = cafeteria.id {
            self.cafeteria_repository
                .append_audit(CafeteriaAudit::new(
                    oid,
                    "rechazada".to_string(),
                    motivo.to_string(),
                ))
                .await?;
        }

        Ok(cafeteria)
    }

    /// 카페테리아 조회
    pub async fn get_cafeteria(&self, cafeteria_id: &str) -> AppResult<Cafeteria> {
        self.cafeteria_repository
            .find_by_id(cafeteria_id)
            .await?
            .ok_or_else(|| AppError::NotFound("카페테리아를 찾을 수 없습니다".to_string()))
    }

    /// 추천 코드 조회
    pub async fn validar_referido(&self, codigo: &str) -> AppResult<ReferidoResponse> {
        let cafeterias_registradas = self
            .cafeteria_repository
            .count_by_codigo_referido(codigo)
            .await?;

        Ok(ReferidoResponse {
            codigo: codigo.to_string(),
            cafeterias_registradas,
        })
    }
}

#[async_trait]
impl Service for OnboardingService {
    fn name(&self) -> &str {
        "onboarding_service"
    }

    async fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        Ok(())
    }
}

fn onboarding_service_construct() -> Arc<dyn Service> {
    OnboardingService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "onboarding_service",
        construct: onboarding_service_construct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validar_documento_pdf_valido() {
        let contenido = base64::engine::general_purpose::STANDARD.encode(b"%PDF-1.7 contenido");

        let bytes = validar_documento("application/pdf", &contenido).unwrap();
        assert_eq!(bytes, b"%PDF-1.7 contenido");
    }

    #[test]
    fn test_validar_documento_mime_rechazado() {
        let contenido = base64::engine::general_purpose::STANDARD.encode(b"MZ");

        let result = validar_documento("application/x-msdownload", &contenido);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validar_documento_base64_invalido() {
        let result = validar_documento("image/png", "esto no es base64 !!!");
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_validar_documento_demasiado_grande() {
        let grande = vec![0u8; MAX_DOCUMENTO_BYTES + 1];
        let contenido = base64::engine::general_purpose::STANDARD.encode(&grande);

        let result = validar_documento("image/jpeg", &contenido);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_token_key_format() {
        assert_eq!(
            OnboardingService::token_key("abc-123"),
            "onboarding:token:abc-123"
        );
    }
}
