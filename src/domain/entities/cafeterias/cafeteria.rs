//! Cafeteria Entity Implementation
//!
//! 카페테리아 파트너 엔티티와 온보딩 상태 머신 구현체입니다.
//! 허용되지 않는 상태 전이는 엔티티 수준에서 거부됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 온보딩 상태
///
/// 정방향 전이는 한 단계씩만 허용됩니다. `Rechazada`는 terminal 상태이며
/// 어느 단계에서든 진입할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EstadoOnboarding {
    /// 초기 등록 완료, 이메일 확인 대기
    Registrada,
    /// 이메일 토큰 확인 완료
    EmailVerificado,
    /// KYC 문서 업로드 완료
    DocumentosSubidos,
    /// KYC 검증 통과
    KycAprobado,
    /// 계약 생성 및 Stripe 연결 계정 발급 완료
    ContratoGenerado,
    /// 거절됨 (terminal)
    Rechazada,
}

impl EstadoOnboarding {
    /// 로그와 감사 기록에 사용하는 문자열 표현
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoOnboarding::Registrada => "registrada",
            EstadoOnboarding::EmailVerificado => "email_verificado",
            EstadoOnboarding::DocumentosSubidos => "documentos_subidos",
            EstadoOnboarding::KycAprobado => "kyc_aprobado",
            EstadoOnboarding::ContratoGenerado => "contrato_generado",
            EstadoOnboarding::Rechazada => "rechazada",
        }
    }

    /// 이 상태에서 `siguiente`로의 전이가 허용되는지 확인합니다.
    pub fn puede_transicionar(&self, siguiente: EstadoOnboarding) -> bool {
        use EstadoOnboarding::*;

        // 거절은 terminal 상태 전까지 언제든 가능
        if siguiente == Rechazada {
            return !matches!(self, Rechazada | ContratoGenerado);
        }

        matches!(
            (self, siguiente),
            (Registrada, EmailVerificado)
                | (EmailVerificado, DocumentosSubidos)
                | (DocumentosSubidos, KycAprobado)
                | (KycAprobado, ContratoGenerado)
        )
    }
}

/// 카페테리아 파트너 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cafeteria {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상호명
    pub nombre: String,
    /// 캠퍼스 이름
    pub campus: String,
    /// 온보딩 연락 이메일 (unique)
    pub email_contacto: String,
    /// 온보딩 진행 상태
    pub estado_onboarding: EstadoOnboarding,
    /// Stripe Connect 연결 계정 ID (계약 생성 단계에서 발급)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stripe_account_id: Option<String>,
    /// 추천 코드 (추천인 링크로 등록된 경우)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_referido: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Cafeteria {
    /// 새 카페테리아 등록 (온보딩 시작 상태)
    pub fn new(
        nombre: String,
        campus: String,
        email_contacto: String,
        codigo_referido: Option<String>,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            nombre,
            campus,
            email_contacto,
            estado_onboarding: EstadoOnboarding::Registrada,
            stripe_account_id: None,
            codigo_referido,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

/// 온보딩 문서 메타데이터
///
/// 파일 본문은 저장하지 않고 메타데이터만 보관합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeteriaDocumento {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub cafeteria_id: ObjectId,
    /// 원본 파일명
    pub nombre_archivo: String,
    /// MIME 타입 (pdf/jpeg/png만 허용)
    pub mime_type: String,
    /// 파일 크기 (바이트)
    pub tamano_bytes: u64,
    pub created_at: DateTime,
}

impl CafeteriaDocumento {
    pub fn new(
        cafeteria_id: ObjectId,
        nombre_archivo: String,
        mime_type: String,
        tamano_bytes: u64,
    ) -> Self {
        Self {
            id: None,
            cafeteria_id,
            nombre_archivo,
            mime_type,
            tamano_bytes,
            created_at: DateTime::now(),
        }
    }
}

/// 온보딩 감사 로그 항목 (append-only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeteriaAudit {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub cafeteria_id: ObjectId,
    /// 이벤트 이름 (예: "estado_cambiado", "documento_subido")
    pub evento: String,
    /// 이벤트 상세
    pub detalle: String,
    pub created_at: DateTime,
}

impl CafeteriaAudit {
    pub fn new(cafeteria_id: ObjectId, evento: String, detalle: String) -> Self {
        Self {
            id: None,
            cafeteria_id,
            evento,
            detalle,
            created_at: DateTime::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&EstadoOnboarding::EmailVerificado).unwrap(),
            "\"email_verificado\""
        );
        assert_eq!(
            serde_json::to_string(&EstadoOnboarding::KycAprobado).unwrap(),
            "\"kyc_aprobado\""
        );
    }

    #[test]
    fn test_transiciones_validas() {
        use EstadoOnboarding::*;

        assert!(Registrada.puede_transicionar(EmailVerificado));
        assert!(EmailVerificado.puede_transicionar(DocumentosSubidos));
        assert!(DocumentosSubidos.puede_transicionar(KycAprobado));
        assert!(KycAprobado.puede_transicionar(ContratoGenerado));
    }

    #[test]
    fn test_transiciones_invalidas() {
        use EstadoOnboarding::*;

        // 단계 건너뛰기 금지
        assert!(!Registrada.puede_transicionar(DocumentosSubidos));
        assert!(!Registrada.puede_transicionar(ContratoGenerado));
        // 역방향 금지
        assert!(!KycAprobado.puede_transicionar(EmailVerificado));
        // 동일 상태 재진입 금지
        assert!(!Registrada.puede_transicionar(Registrada));
    }

    #[test]
    fn test_rechazo_desde_cualquier_etapa() {
        use EstadoOnboarding::*;

        assert!(Registrada.puede_transicionar(Rechazada));
        assert!(DocumentosSubidos.puede_transicionar(Rechazada));
        // 계약 생성 후와 이미 거절된 상태에서는 거절 불가
        assert!(!ContratoGenerado.puede_transicionar(Rechazada));
        assert!(!Rechazada.puede_transicionar(Rechazada));
    }

    #[test]
    fn test_new_cafeteria_starts_registrada() {
        let cafeteria = Cafeteria::new(
            "Cafetería Central".to_string(),
            "Campus Norte".to_string(),
            "central@uni.example".to_string(),
            Some("REF-2026".to_string()),
        );

        assert_eq!(cafeteria.estado_onboarding, EstadoOnboarding::Registrada);
        assert!(cafeteria.stripe_account_id.is_none());
    }
}
