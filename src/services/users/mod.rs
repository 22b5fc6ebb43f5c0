//! 사용자 관리 서비스 모듈
//!
//! - [`aggregate`] - 여섯 저장소의 컬렉션을 메모리에서 조인해 [`UserAggregate`](crate::domain::models::UserAggregate)를 조립
//! - [`user_service`] - 사용자 집계 단위의 목록/조회/생성/수정/삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let id = user_service.create_user(request).await?;
//! let aggregate = user_service.get_user(id).await?;
//! ```

pub mod aggregate;
pub mod user_service;

pub use user_service::UserService;
