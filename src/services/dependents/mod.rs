//! 종속 엔티티 서비스 모듈
//!
//! 계좌, 카드, 한도 관리, 재무 목표, 알림을 개별적으로 관리하는
//! 제네릭 서비스 [`DependentService<T>`](dependent_service::DependentService)를 제공합니다.

pub mod dependent_service;

pub use dependent_service::DependentService;
