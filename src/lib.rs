//! 은행 서비스 백엔드
//!
//! Rust 기반의 은행 도메인 CRUD 서비스입니다.
//! 사용자와 그에 딸린 계좌, 카드, 한도 관리, 재무 목표, 알림을 관리하며,
//! 여섯 개의 독립된 저장소를 묶어 사용자 집계(aggregate)를 조립합니다.
//!
//! # Features
//!
//! - **사용자 집계**: 사용자 + 종속 엔티티를 한 번에 조회/생성/수정/삭제
//! - **종속 엔티티 CRUD**: 계좌, 카드, 한도 관리, 재무 목표, 알림 단건 API
//! - **응답 봉투**: 모든 응답은 `{ data, error, statusCode }` 형태
//! - **MongoDB**: 엔티티별 컬렉션과 정수 ID 시퀀스
//! - **메모리 저장소**: MongoDB 없이 실행 및 테스트
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 집계 조립, 다중 엔티티 쓰기
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / OwnedStore<T>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB | 메모리 │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use banking_service_backend::repositories::Stores;
//! use banking_service_backend::services::users::UserService;
//!
//! let service = UserService::new(Stores::in_memory(), 4);
//!
//! let id = service.create_user(request).await?;
//! let aggregate = service.get_user(id).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
