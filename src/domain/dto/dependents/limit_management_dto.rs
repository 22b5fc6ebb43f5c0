use serde::{Deserialize, Serialize};

use super::DependentDto;
use crate::domain::entities::LimitManagement;
use crate::utils::string_utils::deserialize_null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimitManagementDto {
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    pub daily_limit: f64,
    pub monthly_limit: f64,
    pub used_amount: f64,
}

impl From<LimitManagement> for LimitManagementDto {
    fn from(limit: LimitManagement) -> Self {
        Self {
            id: limit.id,
            user_id: limit.user_id,
            daily_limit: limit.daily_limit,
            monthly_limit: limit.monthly_limit,
            used_amount: limit.used_amount,
        }
    }
}

impl From<LimitManagementDto> for LimitManagement {
    fn from(dto: LimitManagementDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            daily_limit: dto.daily_limit,
            monthly_limit: dto.monthly_limit,
            used_amount: dto.used_amount,
        }
    }
}

impl DependentDto for LimitManagementDto {
    type Entity = LimitManagement;

    fn into_entity(self) -> LimitManagement {
        self.into()
    }

    fn from_entity(entity: LimitManagement) -> Self {
        entity.into()
    }
}
