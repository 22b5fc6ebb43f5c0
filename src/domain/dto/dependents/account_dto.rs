use serde::{Deserialize, Serialize};

use super::DependentDto;
use crate::domain::entities::Account;
use crate::utils::string_utils::deserialize_null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountDto {
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    pub number: String,
    pub agency: String,
    pub balance: f64,
    pub limit: f64,
}

impl From<Account> for AccountDto {
    fn from(account: Account) -> Self {
        let Account {
            id,
            user_id,
            number,
            agency,
            balance,
            limit,
        } = account;

        Self {
            id,
            user_id,
            number,
            agency,
            balance,
            limit,
        }
    }
}

impl From<AccountDto> for Account {
    fn from(dto: AccountDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            number: dto.number,
            agency: dto.agency,
            balance: dto.balance,
            limit: dto.limit,
        }
    }
}

impl DependentDto for AccountDto {
    type Entity = Account;

    fn into_entity(self) -> Account {
        self.into()
    }

    fn from_entity(entity: Account) -> Self {
        entity.into()
    }
}
