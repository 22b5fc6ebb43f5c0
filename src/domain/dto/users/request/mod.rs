//! 사용자 요청 DTO

pub mod user_write_request;

pub use user_write_request::UserWriteRequest;
