//! 인증된 요청 컨텍스트 모델
//!
//! 미들웨어가 검증한 토큰 정보를 핸들러에서 타입 안전하게 꺼내 쓰기 위한
//! extractor들을 제공합니다.

pub mod authenticated_user;
pub mod requirements;

pub use authenticated_user::*;
pub use requirements::*;
