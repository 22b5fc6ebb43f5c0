//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 각 엔티티는 자신만의 MongoDB 컬렉션에 독립적으로 저장되며,
//! 엔티티 사이의 관계는 `user_id` 조인 키로만 표현됩니다.
//!
//! ## 구성
//!
//! ```text
//! entities
//! ├── users/        ← User (사용자, CPF 유니크)
//! └── dependents/   ← 사용자에 종속된 엔티티
//!     ├── Account          (0..1)
//!     ├── Card             (0..1)
//!     ├── LimitManagement  (0..1)
//!     ├── FinancialGoal    (0..1)
//!     └── News             (0..N)
//! ```
//!
//! 외래 키 무결성은 저장소에서 강제되지 않습니다.
//! 서비스 계층이 생성/수정/삭제 시 `user_id`를 일관되게 유지합니다.

pub mod users;
pub mod dependents;

pub use users::user::User;
pub use dependents::{Account, Card, FinancialGoal, LimitManagement, News, UserOwned};
