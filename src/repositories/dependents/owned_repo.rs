use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::StreamExt;
use mongodb::{Collection, IndexModel, bson::{Document, doc}, options::IndexOptions};

use crate::{
    db::Database,
    domain::entities::UserOwned,
    errors::errors::{AppError, AppResult},
    repositories::{OwnedStore, map_write_error},
};

/// 종속 엔티티용 제네릭 MongoDB 리포지토리
///
/// 컬렉션과 ID 시퀀스 이름은 모두 `T::COLLECTION`입니다.
pub struct MongoOwnedRepository<T> {
    db: Arc<Database>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: UserOwned> MongoOwnedRepository<T> {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    fn collection(&self) -> Collection<T> {
        self.db.get_database().collection::<T>(T::COLLECTION)
    }

    /// `user_id` 인덱스를 생성합니다.
    ///
    /// 사용자당 한 개인 엔티티는 유니크 인덱스로 0..1 관계를 보장합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .unique(T::SINGLE_PER_USER)
                .name(format!("{}_user_id", T::COLLECTION))
                .build())
            .build();

        self.collection()
            .create_indexes([user_id_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_many(&self, filter: Document) -> AppResult<Vec<T>> {
        let mut cursor = self.collection()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut entities = Vec::new();
        while let Some(entity) = cursor.next().await {
            entities.push(entity.map_err(|e| AppError::DatabaseError(e.to_string()))?);
        }

        Ok(entities)
    }

    fn duplicate_message() -> String {
        format!("사용자에게 이미 {}이(가) 있습니다", T::LABEL)
    }
}

#[async_trait]
impl<T: UserOwned> OwnedStore<T> for MongoOwnedRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        self.find_many(doc! {}).await
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        self.collection()
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<T>> {
        self.find_many(doc! { "user_id": user_id }).await
    }

    async fn save(&self, mut entity: T) -> AppResult<T> {
        match entity.id().filter(|id| *id > 0) {
            Some(id) => {
                self.collection()
                    .replace_one(doc! { "_id": id }, &entity)
                    .upsert(true)
                    .await
                    .map_err(|e| map_write_error(e, &Self::duplicate_message()))?;
            }
            None => {
                entity.set_id(Some(self.db.next_sequence(T::COLLECTION).await?));

                self.collection()
                    .insert_one(&entity)
                    .await
                    .map_err(|e| map_write_error(e, &Self::duplicate_message()))?;
            }
        }

        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let result = self.collection()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
