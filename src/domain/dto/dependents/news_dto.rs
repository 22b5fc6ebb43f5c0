use serde::{Deserialize, Serialize};

use super::DependentDto;
use crate::domain::entities::News;
use crate::utils::string_utils::deserialize_null_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewsDto {
    pub id: Option<i64>,
    #[serde(deserialize_with = "deserialize_null_default")]
    pub user_id: i64,
    pub icon: String,
    pub text: String,
}

impl From<News> for NewsDto {
    fn from(news: News) -> Self {
        Self {
            id: news.id,
            user_id: news.user_id,
            icon: news.icon,
            text: news.text,
        }
    }
}

impl From<NewsDto> for News {
    fn from(dto: NewsDto) -> Self {
        Self {
            id: dto.id,
            user_id: dto.user_id,
            icon: dto.icon,
            text: dto.text,
        }
    }
}

impl DependentDto for NewsDto {
    type Entity = News;

    fn into_entity(self) -> News {
        self.into()
    }

    fn from_entity(entity: News) -> Self {
        entity.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_news_payload() {
        let dto: NewsDto = serde_json::from_str(r#"{"text":"hi"}"#).unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.user_id, 0);
        assert_eq!(dto.text, "hi");
    }

    #[test]
    fn test_news_dto_uses_camel_case() {
        let dto = NewsDto {
            id: Some(1),
            user_id: 2,
            icon: String::new(),
            text: "hi".to_string(),
        };

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["userId"], 2);
        assert!(json.get("user_id").is_none());
    }
}
