//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! MongoDB를 주 저장소로 사용하고 Redis를 통한 캐싱을 지원합니다.
//! 각 리포지토리는 `inventory::submit!`으로 레지스트리에 등록되어
//! 부팅 시 `init()`에서 인덱스를 생성합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::menus::MenuRepository;
//!
//! let menu_repo = MenuRepository::instance();
//! let menu = menu_repo.find_by_id("64f0c2a1b5e8d93f7a1c0001").await?;
//! ```

pub mod menus;
pub mod reservas;
pub mod users;
pub mod notificaciones;
pub mod cafeterias;
