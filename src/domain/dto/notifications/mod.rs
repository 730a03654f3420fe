//! 인앱 알림 관련 DTO

pub mod response;

pub use response::*;
