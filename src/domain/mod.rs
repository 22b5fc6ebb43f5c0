//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 엔티티와 읽기 모델, API 계약을 담당합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 컬렉션별로 독립 저장되는 엔티티 (User + 종속 엔티티 5종)
//! ├── models    - 저장되지 않는 읽기 모델 (UserAggregate)
//! └── dto       - API 요청/응답 객체와 공통 응답 봉투
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 엔티티 vs 읽기 모델
//!
//! | 구분 | 저장 | 예 |
//! |------|------|----|
//! | Entity | 컬렉션 단위로 저장 | `User`, `Account`, `News` |
//! | Model | 요청 시 조립, 저장되지 않음 | `UserAggregate` |
//! | DTO | HTTP 경계 (camelCase JSON) | `UserWriteRequest`, `UserResponse` |

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use models::*;
