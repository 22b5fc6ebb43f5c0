//! User Entity Implementation
//!
//! 은행 고객을 표현하는 사용자 엔티티입니다.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `id`는 저장소가 할당하는 양의 정수이며, 저장 전에는 `None`입니다.
/// `cpf`는 전체 사용자 사이에서 유일합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 이름
    pub name: String,
    /// 주민 번호 (CPF, unique)
    pub cpf: String,
    /// 이메일
    pub email: String,
    /// 전화번호
    pub phone: String,
    /// 생년월일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<NaiveDate>,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime<Utc>,
    /// 수정 시간
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 아직 저장되지 않은 새 사용자를 생성합니다.
    pub fn new(
        name: String,
        cpf: String,
        email: String,
        phone: String,
        birthdate: Option<NaiveDate>,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();

        Self {
            id: None,
            name,
            cpf,
            email,
            phone,
            birthdate,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// 저장소가 양의 ID를 할당했는지 확인
    pub fn persisted_id(&self) -> Option<i64> {
        self.id.filter(|id| *id > 0)
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_not_persisted() {
        let user = User::new(
            "Ana".to_string(),
            "111".to_string(),
            "ana@example.com".to_string(),
            "555".to_string(),
            None,
            "hash".to_string(),
        );

        assert_eq!(user.persisted_id(), None);
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_non_positive_id_is_not_persisted() {
        let mut user = User::new(
            "Ana".to_string(),
            "111".to_string(),
            String::new(),
            String::new(),
            None,
            "hash".to_string(),
        );

        user.id = Some(0);
        assert_eq!(user.persisted_id(), None);

        user.id = Some(7);
        assert_eq!(user.persisted_id(), Some(7));
    }

    #[test]
    fn test_id_is_stored_as_mongo_primary_key() {
        let mut user = User::new(
            "Ana".to_string(),
            "111".to_string(),
            String::new(),
            String::new(),
            NaiveDate::from_ymd_opt(1990, 5, 17),
            "hash".to_string(),
        );
        user.id = Some(3);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["_id"], 3);
        assert_eq!(json["birthdate"], "1990-05-17");
    }
}
