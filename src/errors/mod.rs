//! 에러 처리 모듈
//!
//! [`AppError`](errors::AppError)와 응답 봉투 변환을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
