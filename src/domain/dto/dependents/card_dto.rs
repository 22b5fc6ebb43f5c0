use serde::{Deserialize, Serialize};

use super::DependentDto;
use crate::domain::entities::Card;
use crate::utils::string_utils::deserialize_null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDto {
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    pub number: String,
    pub limit: f64,
}

impl From<Card> for CardDto {
    fn from(card: Card) -> Self {
        Self {
            id: card.id,
            user_id: card.user_id,
            number: card.number,
            limit: card.limit,
        }
    }
}

impl From<CardDto> for Card {
    fn from(dto: CardDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            number: dto.number,
            limit: dto.limit,
        }
    }
}

impl DependentDto for CardDto {
    type Entity = Card;

    fn into_entity(self) -> Card {
        self.into()
    }

    fn from_entity(entity: Card) -> Self {
        entity.into()
    }
}
