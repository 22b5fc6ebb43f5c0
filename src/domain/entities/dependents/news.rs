//! 알림(News) 엔티티

use serde::{Deserialize, Serialize};

use super::UserOwned;

/// 사용자에게 노출되는 알림 피드 항목 (사용자당 0..N)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct News {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID
    pub user_id: i64,
    /// 아이콘 URL
    #[serde(default)]
    pub icon: String,
    /// 알림 본문
    pub text: String,
}

impl UserOwned for News {
    const COLLECTION: &'static str = "news";
    const LABEL: &'static str = "news";
    const SINGLE_PER_USER: bool = false;

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
