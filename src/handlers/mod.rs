//! HTTP 요청 핸들러
//!
//! - [`users`] - 사용자 집계 엔드포인트
//! - [`dependents`] - 종속 엔티티 공용 CRUD 엔드포인트

pub mod dependents;
pub mod users;
