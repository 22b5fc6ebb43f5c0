//! 사용자 집계 응답 DTO

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::dto::dependents::{
    AccountDto, CardDto, FinancialGoalDto, LimitManagementDto, NewsDto,
};
use crate::domain::models::UserAggregate;

/// 사용자 집계의 JSON 표현
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub cpf: String,
    pub email: String,
    pub phone: String,
    pub birthdate: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub account: Option<AccountDto>,
    pub card: Option<CardDto>,
    pub limit_management: Option<LimitManagementDto>,
    pub financial_goal: Option<FinancialGoalDto>,
    pub news: Vec<NewsDto>,
}

impl From<UserAggregate> for UserResponse {
    fn from(aggregate: UserAggregate) -> Self {
        let UserAggregate {
            user,
            account,
            card,
            limit_management,
            financial_goal,
            news,
        } = aggregate;

        Self {
            id: user.id.unwrap_or_default(),
            name: user.name,
            cpf: user.cpf,
            email: user.email,
            phone: user.phone,
            birthdate: user.birthdate,
            created_at: user.created_at,
            updated_at: user.updated_at,
            account: account.map(AccountDto::from),
            card: card.map(CardDto::from),
            limit_management: limit_management.map(LimitManagementDto::from),
            financial_goal: financial_goal.map(FinancialGoalDto::from),
            news: news.into_iter().map(NewsDto::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{News, User};

    #[test]
    fn test_response_hides_password_hash() {
        let mut user = User::new(
            "Ana".to_string(),
            "111".to_string(),
            String::new(),
            String::new(),
            None,
            "$2b$04$secret".to_string(),
        );
        user.id = Some(1);

        let mut aggregate = UserAggregate::bare(user);
        aggregate.news.push(News {
            id: Some(2),
            user_id: 1,
            icon: String::new(),
            text: "hi".to_string(),
        });

        let response = UserResponse::from(aggregate);
        let json = serde_json::to_string(&response).unwrap();

        assert_eq!(response.id, 1);
        assert_eq!(response.news.len(), 1);
        assert!(!json.contains("secret"));
        assert!(json.contains("\"limitManagement\":null"));
    }
}
