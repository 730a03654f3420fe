//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! 회원가입, 로그인, 알림 설정 변경을 위한 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring Security | 이 시스템 | 역할 |
//! |-----------------|-----------|------|
//! | `UserDetails` | `UserResponse` | 인증된 사용자 정보 |
//! | `@RequestBody CreateUserDto` | `CreateUserRequest` | 회원가입 요청 |
//! | `JwtAuthenticationToken` | `LoginResponse` | 인증 토큰 응답 |

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
