//! 한도 관리 엔티티

use serde::{Deserialize, Serialize};

use super::UserOwned;

/// 사용자의 지출 한도 설정 (사용자당 0..1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitManagement {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID
    pub user_id: i64,
    /// 일일 한도
    pub daily_limit: f64,
    /// 월간 한도
    pub monthly_limit: f64,
    /// 이번 달 사용 금액
    pub used_amount: f64,
}

impl UserOwned for LimitManagement {
    const COLLECTION: &'static str = "limit_managements";
    const LABEL: &'static str = "limit management";
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
