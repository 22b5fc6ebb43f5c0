//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 객체를 정의합니다.
//! 모든 DTO는 camelCase JSON으로 직렬화되며, 엔티티와의 변환은
//! 필드를 그대로 옮기는 구조적 변환(`From`)으로만 이루어집니다.
//!
//! ```text
//! dto/
//! ├── api_response.rs   - 공통 응답 봉투 { data, error, statusCode }
//! ├── dependents/       - 종속 엔티티 DTO (읽기/쓰기 공용)
//! └── users/
//!     ├── request/      - UserWriteRequest (생성/수정 쓰기 모델)
//!     └── response/     - UserResponse (집계 읽기 모델)
//! ```

pub mod api_response;
pub mod dependents;
pub mod users;

pub use api_response::{ApiResponse, ErrorResponse};
pub use dependents::*;
pub use users::*;
