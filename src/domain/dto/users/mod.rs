//! 사용자 관련 DTO 모듈
//!
//! - [`request`] - 생성/수정에 사용하는 쓰기 모델 ([`UserWriteRequest`])
//! - [`response`] - 집계 읽기 모델의 JSON 표현 ([`UserResponse`])

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
