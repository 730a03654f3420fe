//! 온보딩 요청 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 카페테리아 등록 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrarCafeteriaRequest {
    /// 상호명
    #[validate(length(min = 2, max = 100, message = "상호명은 2-100자 사이여야 합니다"))]
    pub nombre: String,

    /// 캠퍼스 이름
    #[validate(length(min = 1, max = 100, message = "캠퍼스 이름이 필요합니다"))]
    pub campus: String,

    /// 온보딩 연락 이메일
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email_contacto: String,

    /// 추천 코드 (선택)
    pub codigo_referido: Option<String>,
}

/// 이메일 확인 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConfirmarEmailRequest {
    /// 등록 시 이메일로 발송된 확인 토큰 (UUID)
    #[validate(length(min = 1, message = "token이 필요합니다"))]
    pub token: String,
}

/// 온보딩 거절 요청 DTO (admin 전용)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RechazarRequest {
    /// 거절 사유 (감사 로그에 기록)
    #[validate(length(min = 1, max = 500, message = "motivo가 필요합니다"))]
    pub motivo: String,
}

/// KYC 문서 업로드 요청 DTO
///
/// 파일 본문은 base64로 전달되며 크기/MIME 검증은 서비스 계층에서
/// 수행합니다 (10MB, pdf/jpeg/png만 허용).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubirDocumentoRequest {
    /// 원본 파일명
    #[validate(length(min = 1, max = 255, message = "파일명이 필요합니다"))]
    pub nombre_archivo: String,

    /// MIME 타입
    #[validate(length(min = 1, message = "mime_type이 필요합니다"))]
    pub mime_type: String,

    /// base64 인코딩된 파일 본문
    #[validate(length(min = 1, message = "contenido_base64가 필요합니다"))]
    pub contenido_base64: String,
}
