use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{Collection, IndexModel, bson::doc, options::IndexOptions};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::{AppError, AppResult},
    repositories::{UserStore, map_write_error},
};

/// MongoDB `users` 컬렉션 리포지토리
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    pub async fn create_indexes(&self) -> AppResult<()> {
        // CPF 유니크 인덱스
        let cpf_index = IndexModel::builder()
            .keys(doc! { "cpf": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("cpf_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([cpf_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for MongoUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut users = Vec::new();
        while let Some(user) = cursor.next().await {
            users.push(user.map_err(|e| AppError::DatabaseError(e.to_string()))?);
        }

        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<User>> {
        self.collection()
            .find_one(doc! { "cpf": cpf })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn exists_by_cpf(&self, cpf: &str) -> AppResult<bool> {
        let count = self.collection()
            .count_documents(doc! { "cpf": cpf })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        const DUPLICATE_CPF: &str = "이미 등록된 CPF입니다";

        match user.persisted_id() {
            Some(id) => {
                self.collection()
                    .replace_one(doc! { "_id": id }, &user)
                    .upsert(true)
                    .await
                    .map_err(|e| map_write_error(e, DUPLICATE_CPF))?;
            }
            None => {
                user.id = Some(self.db.next_sequence(Self::COLLECTION).await?);

                self.collection()
                    .insert_one(&user)
                    .await
                    .map_err(|e| map_write_error(e, DUPLICATE_CPF))?;
            }
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
