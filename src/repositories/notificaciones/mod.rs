//! 알림 리포지토리 모듈

pub mod notificacion_repo;

pub use notificacion_repo::*;
