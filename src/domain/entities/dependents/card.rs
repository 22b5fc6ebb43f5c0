//! 카드 엔티티

use serde::{Deserialize, Serialize};

use super::UserOwned;

/// 사용자의 카드 (사용자당 0..1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID
    pub user_id: i64,
    /// 카드 번호
    pub number: String,
    /// 카드 한도
    pub limit: f64,
}

impl UserOwned for Card {
    const COLLECTION: &'static str = "cards";
    const LABEL: &'static str = "card";
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
