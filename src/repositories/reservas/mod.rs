//! 예약 리포지토리 모듈

pub mod reserva_repo;

pub use reserva_repo::*;
