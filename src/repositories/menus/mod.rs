//! 메뉴 리포지토리 모듈

pub mod menu_repo;

pub use menu_repo::*;
