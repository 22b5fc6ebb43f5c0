//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new(
//!     "Maria".to_string(),
//!     "11122233344".to_string(),
//!     "maria@example.com".to_string(),
//!     "+55 11 99999-0000".to_string(),
//!     None,
//!     hashed_password,
//! );
//! ```

pub mod user;
