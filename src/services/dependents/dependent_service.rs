//! 종속 엔티티 단건 CRUD 서비스
//!
//! 계좌, 카드, 한도 관리, 재무 목표, 알림을 사용자 집계와 별도로 다룹니다.
//! 모든 엔티티는 존재하는 사용자에 소속되어야 합니다.

use std::sync::Arc;

use log::{info, warn};

use crate::{
    domain::entities::UserOwned,
    errors::errors::{AppError, AppResult},
    repositories::{OwnedStore, UserStore},
};

pub struct DependentService<T: UserOwned> {
    users: Arc<dyn UserStore>,
    store: Arc<dyn OwnedStore<T>>,
}

impl<T: UserOwned> DependentService<T> {
    pub fn new(users: Arc<dyn UserStore>, store: Arc<dyn OwnedStore<T>>) -> Self {
        Self { users, store }
    }

    /// 전체 목록. `user_id`가 있으면 해당 사용자의 엔티티만 반환합니다.
    pub async fn list(&self, user_id: Option<i64>) -> AppResult<Vec<T>> {
        match user_id {
            Some(user_id) => self.store.find_by_user_id(user_id).await,
            None => self.store.find_all().await,
        }
    }

    pub async fn get(&self, id: i64) -> AppResult<T> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<T>(id))
    }

    /// 새 엔티티를 생성합니다. 요청의 `id`는 무시됩니다.
    pub async fn create(&self, mut entity: T) -> AppResult<T> {
        self.ensure_owner(entity.user_id()).await?;

        if T::SINGLE_PER_USER
            && self
                .store
                .find_one_by_user_id(entity.user_id())
                .await?
                .is_some()
        {
            warn!(
                "Rejected {} creation: user {} already has one",
                T::LABEL,
                entity.user_id()
            );
            return Err(AppError::ConflictError(format!(
                "사용자에게 이미 {}이(가) 있습니다",
                T::LABEL
            )));
        }

        entity.set_id(None);
        let created = self.store.save(entity).await?;

        info!("Created {} {:?} for user {}", T::LABEL, created.id(), created.user_id());
        Ok(created)
    }

    /// 기존 엔티티를 덮어씁니다.
    ///
    /// 요청의 `userId`가 비어 있으면(0 이하) 기존 소유자를 유지합니다.
    pub async fn update(&self, id: i64, mut entity: T) -> AppResult<T> {
        let current = self.get(id).await?;

        if entity.user_id() <= 0 {
            entity.set_user_id(current.user_id());
        } else if entity.user_id() != current.user_id() {
            self.ensure_owner(entity.user_id()).await?;
        }

        entity.set_id(Some(id));
        let updated = self.store.save(entity).await?;

        info!("Updated {} {}", T::LABEL, id);
        Ok(updated)
    }

    /// 엔티티를 삭제하고 삭제된 ID를 반환합니다.
    pub async fn delete(&self, id: i64) -> AppResult<i64> {
        if !self.store.delete_by_id(id).await? {
            return Err(not_found::<T>(id));
        }

        info!("Deleted {} {}", T::LABEL, id);
        Ok(id)
    }

    async fn ensure_owner(&self, user_id: i64) -> AppResult<()> {
        if user_id <= 0 || self.users.find_by_id(user_id).await?.is_none() {
            return Err(AppError::UnprocessableEntity(format!(
                "사용자 {}를 찾을 수 없습니다",
                user_id
            )));
        }
        Ok(())
    }
}

fn not_found<T: UserOwned>(id: i64) -> AppError {
    AppError::NotFound(format!("{} ID {}를 찾을 수 없습니다", T::LABEL, id))
}
