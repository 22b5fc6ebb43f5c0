//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 구체적인 저장소가 아니라 [`UserStore`]와 [`OwnedStore`] trait에만
//! 의존합니다. 엔티티마다 하나의 저장소가 있으며, 저장소 사이에는 트랜잭션이
//! 없습니다. 각 쓰기는 독립적으로 커밋됩니다.
//!
//! # 구현체
//!
//! | 저장소 | MongoDB | 메모리 |
//! |--------|---------|--------|
//! | User | [`MongoUserRepository`] | [`InMemoryUserRepository`] |
//! | 종속 엔티티 | [`MongoOwnedRepository<T>`] | [`InMemoryOwnedRepository<T>`] |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Stores;
//!
//! let stores = Stores::mongo(database).await?;
//! let users = stores.users.find_all().await?;
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::error::{ErrorKind, WriteFailure};

use crate::db::Database;
use crate::domain::entities::{Account, Card, FinancialGoal, LimitManagement, News, User, UserOwned};
use crate::errors::errors::{AppError, AppResult};

pub mod dependents;
pub mod memory;
pub mod users;

pub use dependents::owned_repo::MongoOwnedRepository;
pub use memory::{InMemoryOwnedRepository, InMemoryUserRepository};
pub use users::user_repo::MongoUserRepository;

/// 사용자 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID 오름차순으로 전체 사용자를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Option<User>>;

    async fn exists_by_cpf(&self, cpf: &str) -> AppResult<bool> {
        Ok(self.find_by_cpf(cpf).await?.is_some())
    }

    /// ID가 없으면 새 ID를 발급해 삽입하고, 있으면 덮어씁니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// 사용자 종속 엔티티 저장소
#[async_trait]
pub trait OwnedStore<T: UserOwned>: Send + Sync {
    /// ID 오름차순으로 전체 엔티티를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<T>>;

    /// 사용자당 한 개인 엔티티 조회. 없으면 `None`.
    async fn find_one_by_user_id(&self, user_id: i64) -> AppResult<Option<T>> {
        Ok(self.find_by_user_id(user_id).await?.into_iter().next())
    }

    /// ID가 없으면 새 ID를 발급해 삽입하고, 있으면 덮어씁니다.
    async fn save(&self, entity: T) -> AppResult<T>;

    /// 순서대로 저장합니다. 중간에 실패하면 이미 저장된 항목은 그대로 남습니다.
    async fn save_all(&self, entities: Vec<T>) -> AppResult<Vec<T>> {
        let mut saved = Vec::with_capacity(entities.len());
        for entity in entities {
            saved.push(self.save(entity).await?);
        }
        Ok(saved)
    }

    /// 삭제된 문서가 있으면 `true`
    async fn delete_by_id(&self, id: i64) -> AppResult<bool>;
}

/// 여섯 개 저장소 묶음
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub accounts: Arc<dyn OwnedStore<Account>>,
    pub cards: Arc<dyn OwnedStore<Card>>,
    pub limit_managements: Arc<dyn OwnedStore<LimitManagement>>,
    pub financial_goals: Arc<dyn OwnedStore<FinancialGoal>>,
    pub news: Arc<dyn OwnedStore<News>>,
}

impl Stores {
    /// 프로세스 메모리 저장소
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            accounts: Arc::new(InMemoryOwnedRepository::<Account>::new()),
            cards: Arc::new(InMemoryOwnedRepository::<Card>::new()),
            limit_managements: Arc::new(InMemoryOwnedRepository::<LimitManagement>::new()),
            financial_goals: Arc::new(InMemoryOwnedRepository::<FinancialGoal>::new()),
            news: Arc::new(InMemoryOwnedRepository::<News>::new()),
        }
    }

    /// MongoDB 저장소. 인덱스를 먼저 생성합니다.
    pub async fn mongo(db: Arc<Database>) -> AppResult<Self> {
        let users = MongoUserRepository::new(db.clone());
        users.create_indexes().await?;

        let accounts = MongoOwnedRepository::<Account>::new(db.clone());
        accounts.create_indexes().await?;

        let cards = MongoOwnedRepository::<Card>::new(db.clone());
        cards.create_indexes().await?;

        let limit_managements = MongoOwnedRepository::<LimitManagement>::new(db.clone());
        limit_managements.create_indexes().await?;

        let financial_goals = MongoOwnedRepository::<FinancialGoal>::new(db.clone());
        financial_goals.create_indexes().await?;

        let news = MongoOwnedRepository::<News>::new(db);
        news.create_indexes().await?;

        Ok(Self {
            users: Arc::new(users),
            accounts: Arc::new(accounts),
            cards: Arc::new(cards),
            limit_managements: Arc::new(limit_managements),
            financial_goals: Arc::new(financial_goals),
            news: Arc::new(news),
        })
    }
}

const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB 쓰기 에러를 AppError로 변환합니다.
///
/// 유니크 인덱스 위반(E11000)은 ConflictError, 나머지는 DatabaseError입니다.
pub(crate) fn map_write_error(error: mongodb::error::Error, conflict_message: &str) -> AppError {
    if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *error.kind {
        if write_error.code == DUPLICATE_KEY_CODE {
            return AppError::ConflictError(conflict_message.to_string());
        }
    }

    AppError::DatabaseError(error.to_string())
}
