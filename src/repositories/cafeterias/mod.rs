//! 카페테리아 리포지토리 모듈

pub mod cafeteria_repo;

pub use cafeteria_repo::*;
