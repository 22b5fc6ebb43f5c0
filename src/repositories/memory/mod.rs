//! 프로세스 메모리 저장소
//!
//! `STORAGE_BACKEND=memory`로 실행하거나 테스트에서 MongoDB 없이 서비스를
//! 구동할 때 사용합니다. MongoDB 구현과 같은 규칙을 따릅니다.
//!
//! - ID는 1부터 시작하는 양의 정수이며 ID 오름차순으로 반환됩니다.
//! - 사용자 CPF는 유일합니다.
//! - 사용자당 한 개인 종속 엔티티는 두 번째 인스턴스를 거부합니다.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::{
    domain::entities::{User, UserOwned},
    errors::errors::{AppError, AppResult},
    repositories::{OwnedStore, UserStore},
};

fn poisoned<E>(_: E) -> AppError {
    AppError::InternalError("저장소 잠금이 손상되었습니다".to_string())
}

/// ID 시퀀스. 직접 지정된 ID보다 작은 값은 다시 발급하지 않습니다.
#[derive(Default)]
struct Sequence(AtomicI64);

impl Sequence {
    fn next(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn observe(&self, id: i64) {
        self.0.fetch_max(id, Ordering::SeqCst);
    }
}

/// 메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<BTreeMap<i64, User>>,
    sequence: Sequence,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(&id).cloned())
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<User>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().find(|user| user.cpf == cpf).cloned())
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut rows = self.rows.write().map_err(poisoned)?;

        let duplicate = rows
            .values()
            .any(|existing| existing.cpf == user.cpf && existing.id != user.persisted_id());
        if duplicate {
            return Err(AppError::ConflictError("이미 등록된 CPF입니다".to_string()));
        }

        let id = match user.persisted_id() {
            Some(id) => {
                self.sequence.observe(id);
                id
            }
            None => self.sequence.next(),
        };
        user.id = Some(id);
        rows.insert(id, user.clone());

        Ok(user)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        Ok(rows.remove(&id).is_some())
    }
}

/// 메모리 종속 엔티티 저장소
pub struct InMemoryOwnedRepository<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    sequence: Sequence,
}

impl<T: UserOwned> InMemoryOwnedRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: Sequence::default(),
        }
    }
}

impl<T: UserOwned> Default for InMemoryOwnedRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: UserOwned> OwnedStore<T> for InMemoryOwnedRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<T>> {
        let rows = self.rows.read().map_err(poisoned)?;
        Ok(rows
            .values()
            .filter(|entity| entity.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn save(&self, mut entity: T) -> AppResult<T> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        let current_id = entity.id().filter(|id| *id > 0);

        if T::SINGLE_PER_USER {
            let taken = rows.values().any(|existing| {
                existing.user_id() == entity.user_id() && existing.id() != current_id
            });
            if taken {
                return Err(AppError::ConflictError(format!(
                    "사용자에게 이미 {}이(가) 있습니다",
                    T::LABEL
                )));
            }
        }

        let id = match current_id {
            Some(id) => {
                self.sequence.observe(id);
                id
            }
            None => self.sequence.next(),
        };
        entity.set_id(Some(id));
        rows.insert(id, entity.clone());

        Ok(entity)
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.write().map_err(poisoned)?;
        Ok(rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Card, News};

    fn user(cpf: &str) -> User {
        User::new(
            "Ana".to_string(),
            cpf.to_string(),
            String::new(),
            String::new(),
            None,
            "hash".to_string(),
        )
    }

    fn news(user_id: i64, text: &str) -> News {
        News {
            id: None,
            user_id,
            icon: String::new(),
            text: text.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_user_ids_are_positive_and_increasing() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(user("111")).await.unwrap();
        let second = repo.save(user("222")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_duplicate_cpf_is_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.save(user("111")).await.unwrap();

        let result = repo.save(user("111")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert!(repo.exists_by_cpf("111").await.unwrap());
        assert!(!repo.exists_by_cpf("999").await.unwrap());
    }

    #[actix_web::test]
    async fn test_saving_existing_user_overwrites() {
        let repo = InMemoryUserRepository::new();
        let mut saved = repo.save(user("111")).await.unwrap();

        saved.name = "Beatriz".to_string();
        repo.save(saved.clone()).await.unwrap();

        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "Beatriz");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_explicit_id_advances_sequence() {
        let repo = InMemoryOwnedRepository::<News>::new();
        let mut explicit = news(1, "a");
        explicit.id = Some(10);

        repo.save(explicit).await.unwrap();
        let next = repo.save(news(1, "b")).await.unwrap();

        assert_eq!(next.id, Some(11));
    }

    #[actix_web::test]
    async fn test_find_by_user_id_keeps_id_order() {
        let repo = InMemoryOwnedRepository::<News>::new();
        repo.save_all(vec![news(1, "a"), news(2, "b"), news(1, "c")])
            .await
            .unwrap();

        let texts: Vec<String> = repo
            .find_by_user_id(1)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();

        assert_eq!(texts, vec!["a", "c"]);
        assert!(repo.find_one_by_user_id(3).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_single_per_user_rejects_second_instance() {
        let repo = InMemoryOwnedRepository::<Card>::new();
        let card = Card {
            id: None,
            user_id: 1,
            number: "4111".to_string(),
            limit: 1000.0,
        };

        let saved = repo.save(card.clone()).await.unwrap();
        let second = repo.save(card).await;

        assert!(matches!(second, Err(AppError::ConflictError(_))));

        // 같은 카드를 다시 저장하는 것은 허용
        let mut updated = saved.clone();
        updated.limit = 2000.0;
        assert!(repo.save(updated).await.is_ok());
    }

    #[actix_web::test]
    async fn test_delete_reports_missing_rows() {
        let repo = InMemoryOwnedRepository::<News>::new();
        let saved = repo.save(news(1, "a")).await.unwrap();

        assert!(repo.delete_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!repo.delete_by_id(saved.id.unwrap()).await.unwrap());
    }
}
