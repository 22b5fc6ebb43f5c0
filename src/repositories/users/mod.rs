//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`MongoUserRepository`](user_repo::MongoUserRepository)를 통해 MongoDB 기반
//! 사용자 데이터 관리를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::MongoUserRepository;
//!
//! let user_repo = MongoUserRepository::new(database);
//! let exists = user_repo.exists_by_cpf("11122233344").await?;
//! ```

pub mod user_repo;
