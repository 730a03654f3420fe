//! JWT 토큰 모델
//!
//! 클레임 구조체와 클라이언트에게 전달되는 토큰 쌍을 정의합니다.

pub mod token;

pub use token::*;
