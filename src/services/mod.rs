//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체([`Stores`](crate::repositories::Stores))를 주입받아
//! 동작하며, 모든 연산은 `Result<_, AppError>`를 반환합니다.
//! HTTP 계층은 에러를 공통 응답 봉투로 변환합니다.
//!
//! # 의존성 주입
//!
//! 서비스는 `ServiceLocator` 싱글톤에 등록하지 않고 `main`에서 한 번 생성한 뒤
//! [`AppServices`](crate::routes::AppServices)에 담아 `web::Data`로 핸들러에
//! 주입합니다. 테스트는 같은 서비스를 메모리 저장소로 생성합니다.
//!
//! # Features
//!
//! - 사용자 집계 조회 (사용자 + 계좌/카드/한도/재무 목표/알림)
//! - 사용자와 종속 엔티티의 연쇄 생성/수정/삭제
//! - 종속 엔티티 단위 CRUD
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(Stores::in_memory(), 4);
//! let users = user_service.list_users().await?;
//! ```

pub mod dependents;
pub mod users;
