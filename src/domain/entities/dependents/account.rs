//! 계좌 엔티티

use serde::{Deserialize, Serialize};

use super::UserOwned;

/// 사용자의 입출금 계좌 (사용자당 0..1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID
    pub user_id: i64,
    /// 계좌 번호
    pub number: String,
    /// 지점 번호
    pub agency: String,
    /// 잔액
    pub balance: f64,
    /// 당좌 한도
    pub limit: f64,
}

impl UserOwned for Account {
    const COLLECTION: &'static str = "accounts";
    const LABEL: &'static str = "account";
    const SINGLE_PER_USER: bool = true;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    fn user_id(&self) -> i64 {
        self.user_id
    }

    fn set_user_id(&mut self, user_id: i64) {
        self.user_id = user_id;
    }
}
