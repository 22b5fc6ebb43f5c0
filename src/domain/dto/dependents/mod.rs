//! 종속 엔티티 DTO
//!
//! 같은 DTO를 읽기 응답과 쓰기 요청에 모두 사용합니다.
//! 쓰기 요청에서는 `id`와 `userId`를 생략할 수 있으며,
//! 서비스 계층이 소유 사용자 ID를 강제로 덮어씁니다.

use serde::{Serialize, de::DeserializeOwned};

use crate::domain::entities::UserOwned;

pub mod account_dto;
pub mod card_dto;
pub mod financial_goal_dto;
pub mod limit_management_dto;
pub mod news_dto;

pub use account_dto::AccountDto;
pub use card_dto::CardDto;
pub use financial_goal_dto::FinancialGoalDto;
pub use limit_management_dto::LimitManagementDto;
pub use news_dto::NewsDto;

/// 엔티티와 1:1로 대응되는 DTO
///
/// 제네릭 핸들러가 요청 본문을 엔티티로, 엔티티를 응답 본문으로 바꿀 때 사용합니다.
pub trait DependentDto: Serialize + DeserializeOwned + Send + 'static {
    type Entity: UserOwned;

    fn into_entity(self) -> Self::Entity;

    fn from_entity(entity: Self::Entity) -> Self;
}
