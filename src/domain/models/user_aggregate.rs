//! 사용자 집계(Aggregate) 읽기 모델

use crate::domain::entities::{Account, Card, FinancialGoal, LimitManagement, News, User};

/// 사용자와 그에 종속된 엔티티를 한데 모은 읽기 모델
///
/// 조회 시점에만 조립되며 별도 레코드로 저장되지 않습니다.
/// 종속 엔티티가 없으면 해당 필드는 `None`(또는 빈 `news`)입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAggregate {
    pub user: User,
    pub account: Option<Account>,
    pub card: Option<Card>,
    pub limit_management: Option<LimitManagement>,
    pub financial_goal: Option<FinancialGoal>,
    pub news: Vec<News>,
}

impl UserAggregate {
    /// 종속 엔티티 없이 사용자만 담은 집계
    pub fn bare(user: User) -> Self {
        Self {
            user,
            account: None,
            card: None,
            limit_management: None,
            financial_goal: None,
            news: Vec::new(),
        }
    }

    pub fn id(&self) -> Option<i64> {
        self.user.id
    }
}
