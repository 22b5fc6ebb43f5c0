use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DependentDto;
use crate::domain::entities::FinancialGoal;
use crate::utils::string_utils::deserialize_null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialGoalDto {
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    pub description: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub deadline: Option<NaiveDate>,
}

impl From<FinancialGoal> for FinancialGoalDto {
    fn from(goal: FinancialGoal) -> Self {
        Self {
            id: goal.id,
            user_id: goal.user_id,
            description: goal.description,
            target_amount: goal.target_amount,
            current_amount: goal.current_amount,
            deadline: goal.deadline,
        }
    }
}

impl From<FinancialGoalDto> for FinancialGoal {
    fn from(dto: FinancialGoalDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            description: dto.description,
            target_amount: dto.target_amount,
            current_amount: dto.current_amount,
            deadline: dto.deadline,
        }
    }
}

impl DependentDto for FinancialGoalDto {
    type Entity = FinancialGoal;

    fn into_entity(self) -> FinancialGoal {
        self.into()
    }

    fn from_entity(entity: FinancialGoal) -> Self {
        entity.into()
    }
}
