//! # 사용자 집계 조립
//!
//! 한 번씩 가져온 여섯 개 컬렉션을 메모리에서 조인해 사용자마다 하나의
//! [`UserAggregate`]를 만듭니다.
//!
//! ```text
//! users ─┬─ accounts          (user_id 일치하는 첫 번째)
//!        ├─ cards             (user_id 일치하는 첫 번째)
//!        ├─ limit_managements (user_id 일치하는 첫 번째)
//!        ├─ financial_goals   (user_id 일치하는 첫 번째)
//!        └─ news              (user_id 일치하는 전부, 저장소 순서 유지)
//! ```
//!
//! 종속 엔티티를 `user_id`로 한 번 색인한 뒤 조회하므로 비용은
//! O(U + A + C + L + F + N)입니다. 결과는 사용자별 선형 탐색과 같습니다.
//! 종속 엔티티가 없어도 에러가 아니며 해당 필드가 비어 있을 뿐입니다.

use std::collections::HashMap;

use crate::domain::entities::{Account, Card, FinancialGoal, LimitManagement, News, User, UserOwned};
use crate::domain::models::UserAggregate;

/// 사용자 순서대로 집계를 조립합니다.
pub fn assemble(
    users: Vec<User>,
    news: Vec<News>,
    limits: Vec<LimitManagement>,
    goals: Vec<FinancialGoal>,
    cards: Vec<Card>,
    accounts: Vec<Account>,
) -> Vec<UserAggregate> {
    let mut news = index_by_user(news);
    let mut limits = index_by_user(limits);
    let mut goals = index_by_user(goals);
    let mut cards = index_by_user(cards);
    let mut accounts = index_by_user(accounts);

    users
        .into_iter()
        .map(|user| match user.id {
            Some(id) => UserAggregate {
                account: take_first(&mut accounts, id),
                card: take_first(&mut cards, id),
                limit_management: take_first(&mut limits, id),
                financial_goal: take_first(&mut goals, id),
                news: news.remove(&id).unwrap_or_default(),
                user,
            },
            None => UserAggregate::bare(user),
        })
        .collect()
}

/// 저장소가 돌려준 순서를 유지한 채 `user_id`로 묶습니다.
fn index_by_user<T: UserOwned>(rows: Vec<T>) -> HashMap<i64, Vec<T>> {
    let mut index: HashMap<i64, Vec<T>> = HashMap::new();
    for row in rows {
        index.entry(row.user_id()).or_default().push(row);
    }
    index
}

fn take_first<T>(index: &mut HashMap<i64, Vec<T>>, user_id: i64) -> Option<T> {
    index
        .remove(&user_id)
        .and_then(|rows| rows.into_iter().next())
}
