//! 재무 목표 엔티티

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::UserOwned;

/// 사용자의 저축 목표 (사용자당 0..1)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// 소유 사용자 ID
    pub user_id: i64,
    /// 목표 설명
    pub description: String,
    /// 목표 금액
    pub target_amount: f64,
    /// 현재 모은 금액
    pub current_amount: f64,
    /// 목표 기한
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl UserOwned for FinancialGoal {
    const COLLECTION: &'static str = "financial_goals";
    const LABEL: &'static str = "financial goal";
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
