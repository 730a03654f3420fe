//! Checkout 관련 DTO

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
