//! 사용자 종속 엔티티 모듈
//!
//! Account, Card, LimitManagement, FinancialGoal, News는 모두 `user_id`로
//! 소유 사용자를 가리킵니다. 저장소와 서비스는 [`UserOwned`] trait을 통해
//! 이 엔티티들을 하나의 제네릭 코드로 다룹니다.

use std::fmt::Debug;

use serde::{Serialize, de::DeserializeOwned};

pub mod account;
pub mod card;
pub mod financial_goal;
pub mod limit_management;
pub mod news;

pub use account::Account;
pub use card::Card;
pub use financial_goal::FinancialGoal;
pub use limit_management::LimitManagement;
pub use news::News;

/// 사용자에게 소속된 엔티티의 공통 계약
pub trait UserOwned:
    Debug + Clone + PartialEq + Send + Sync + Unpin + Serialize + DeserializeOwned + 'static
{
    /// MongoDB 컬렉션 이름 (ID 시퀀스 이름으로도 사용)
    const COLLECTION: &'static str;

    /// 로그와 에러 메시지에 사용되는 이름
    const LABEL: &'static str;

    /// 사용자당 최대 한 개만 존재할 수 있는지 여부
    const SINGLE_PER_USER: bool;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: Option<i64>);

    fn user_id(&self) -> i64;

    fn set_user_id(&mut self, user_id: i64);
}
