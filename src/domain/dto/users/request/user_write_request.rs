//! 사용자 쓰기 모델
//!
//! 생성(`POST /users`)과 수정(`PUT /users/{id}`)에서 공통으로 사용합니다.
//! 모든 필드는 생략 가능하며, 수정 시에는 빈 문자열과 `null`이
//! "기존 값 유지"를 의미합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::dto::dependents::{
    AccountDto, CardDto, FinancialGoalDto, LimitManagementDto, NewsDto,
};
use crate::domain::entities::User;
use crate::utils::string_utils::{
    deserialize_null_default, deserialize_optional_string, non_blank,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserWriteRequest {
    /// 무시됩니다. 수정 대상은 항상 경로의 ID입니다.
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub cpf: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_optional_string")]
    pub phone: Option<String>,
    pub birthdate: Option<NaiveDate>,
    /// 평문 비밀번호. 저장 전에 bcrypt로 해시됩니다.
    #[serde(skip_serializing, deserialize_with = "deserialize_null_default")]
    pub password: String,
    pub account: Option<AccountDto>,
    pub card: Option<CardDto>,
    pub limit_management: Option<LimitManagementDto>,
    pub financial_goal: Option<FinancialGoalDto>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub news: Vec<NewsDto>,
}

impl UserWriteRequest {
    /// 요청에 포함된 모든 종속 엔티티의 `userId`를 덮어씁니다.
    pub fn stamp_user_id(&mut self, user_id: i64) {
        if let Some(account) = self.account.as_mut() {
            account.user_id = user_id;
        }
        if let Some(card) = self.card.as_mut() {
            card.user_id = user_id;
        }
        if let Some(limit) = self.limit_management.as_mut() {
            limit.user_id = user_id;
        }
        if let Some(goal) = self.financial_goal.as_mut() {
            goal.user_id = user_id;
        }
        for news in &mut self.news {
            news.user_id = user_id;
        }
    }

    /// 요청에 포함된 모든 종속 엔티티의 ID를 지웁니다.
    ///
    /// 생성 시에는 저장소가 새 ID를 할당해야 하므로 호출자가 보낸 ID를 버립니다.
    pub fn clear_dependent_ids(&mut self) {
        if let Some(account) = self.account.as_mut() {
            account.id = None;
        }
        if let Some(card) = self.card.as_mut() {
            card.id = None;
        }
        if let Some(limit) = self.limit_management.as_mut() {
            limit.id = None;
        }
        if let Some(goal) = self.financial_goal.as_mut() {
            goal.id = None;
        }
        for news in &mut self.news {
            news.id = None;
        }
    }

    /// 변경된 CPF (비어 있으면 `None`)
    pub fn changed_cpf(&self) -> Option<String> {
        self.cpf.as_deref().and_then(non_blank)
    }

    /// 비어 있지 않은 필드만 기존 사용자에 덮어씁니다.
    ///
    /// 비밀번호는 해시가 필요하므로 여기서 다루지 않습니다.
    /// 하나라도 바뀌었으면 `true`를 반환합니다.
    pub fn apply_to(&self, user: &mut User) -> bool {
        let mut changed = false;

        for (incoming, current) in [
            (&self.name, &mut user.name),
            (&self.cpf, &mut user.cpf),
            (&self.email, &mut user.email),
            (&self.phone, &mut user.phone),
        ] {
            if let Some(value) = incoming.as_deref().and_then(non_blank) {
                if *current != value {
                    *current = value;
                    changed = true;
                }
            }
        }

        if let Some(birthdate) = self.birthdate {
            if user.birthdate != Some(birthdate) {
                user.birthdate = Some(birthdate);
                changed = true;
            }
        }

        changed
    }
}
