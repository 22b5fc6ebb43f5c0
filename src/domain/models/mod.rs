//! 도메인 읽기 모델
//!
//! 여러 저장소에서 가져온 엔티티를 메모리에서 조인해 만든, 저장되지 않는 모델입니다.

pub mod user_aggregate;

pub use user_aggregate::UserAggregate;
