//! # 사용자 관리 서비스 구현
//!
//! 사용자 집계(사용자 + 계좌/카드/한도 관리/재무 목표/알림)의 전체 생명주기를
//! 관리하는 핵심 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   List / Get    │  │     Create      │  │ Update / Delete │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • findAll x6    │  │ • CPF 중복 검사  │  │ • 종속 ID 검증   │  │
//! │  │ • 메모리 조인    │  │ • User 먼저 저장 │  │ • 필드 병합      │  │
//! │  │ • ID 필터        │  │ • userId 기록    │  │ • 종속 → User 삭제│  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//!   UserStore · OwnedStore<Account|Card|LimitManagement|FinancialGoal|News>
//! ```
//!
//! ## 쓰기 일관성
//!
//! 저장소 사이에는 트랜잭션이 없습니다. 각 쓰기는 독립적으로 커밋되고,
//! 뒤따르는 쓰기가 실패해도 이미 커밋된 쓰기는 되돌리지 않습니다.
//! 대신 모든 검증은 첫 번째 쓰기 이전에 끝나므로, 거부된 요청은
//! 어떤 저장소도 변경하지 않습니다.
//!
//! ## 수정 규칙
//!
//! | 요청의 종속 엔티티 | 기존 레코드 | 결과 |
//! |--------------------|-------------|------|
//! | `id` 없음 | 없음 | 새로 생성 |
//! | `id` 없음 | 있음 | 기존 레코드를 덮어씀 |
//! | `id` 있음 | 같은 `id` | 덮어씀 |
//! | `id` 있음 | 없음/다른 `id` | 전체 수정 실패 (404) |

use log::{error, info, warn};

use crate::{
    domain::{
        dto::users::request::UserWriteRequest,
        entities::{Account, Card, FinancialGoal, LimitManagement, News, User, UserOwned},
        models::UserAggregate,
    },
    errors::errors::{AppError, AppResult},
    repositories::{OwnedStore, Stores},
    services::users::aggregate,
    utils::string_utils::{clean_optional_string, validate_required_string},
};

/// 요청에서 꺼낸 종속 엔티티 쓰기 목록
#[derive(Debug, Default)]
struct DependentWrites {
    account: Option<Account>,
    card: Option<Card>,
    limit_management: Option<LimitManagement>,
    financial_goal: Option<FinancialGoal>,
    news: Vec<News>,
}

impl DependentWrites {
    fn take_from(request: &mut UserWriteRequest) -> Self {
        Self {
            account: request.account.take().map(Account::from),
            card: request.card.take().map(Card::from),
            limit_management: request.limit_management.take().map(LimitManagement::from),
            financial_goal: request.financial_goal.take().map(FinancialGoal::from),
            news: std::mem::take(&mut request.news)
                .into_iter()
                .map(News::from)
                .collect(),
        }
    }
}

pub struct UserService {
    stores: Stores,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(stores: Stores, bcrypt_cost: u32) -> Self {
        Self { stores, bcrypt_cost }
    }

    /// 전체 사용자 집계를 반환합니다. 사용자가 없으면 빈 목록입니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserAggregate>> {
        let users = self.stores.users.find_all().await?;
        let news = self.stores.news.find_all().await?;
        let limits = self.stores.limit_managements.find_all().await?;
        let goals = self.stores.financial_goals.find_all().await?;
        let cards = self.stores.cards.find_all().await?;
        let accounts = self.stores.accounts.find_all().await?;

        Ok(aggregate::assemble(users, news, limits, goals, cards, accounts))
    }

    /// ID로 사용자 집계를 조회합니다.
    pub async fn get_user(&self, id: i64) -> AppResult<UserAggregate> {
        let users = self.list_users().await?;

        if users.is_empty() {
            return Err(AppError::NotFound(
                "시스템에 등록된 사용자가 없습니다".to_string(),
            ));
        }

        users
            .into_iter()
            .find(|aggregate| aggregate.id() == Some(id))
            .ok_or_else(|| {
                AppError::NotFound("제공된 ID에 해당하는 사용자가 없습니다".to_string())
            })
    }

    /// 사용자와 요청에 포함된 종속 엔티티를 생성하고 새 사용자 ID를 반환합니다.
    pub async fn create_user(&self, mut request: UserWriteRequest) -> AppResult<i64> {
        let start_time = std::time::Instant::now();

        let name = validate_required_string(request.name.as_deref().unwrap_or_default(), "name")?;
        let cpf = validate_required_string(request.cpf.as_deref().unwrap_or_default(), "cpf")?;

        if self.stores.users.exists_by_cpf(&cpf).await? {
            warn!("Rejected user creation: cpf already registered");
            return Err(AppError::ConflictError("이미 등록된 CPF입니다".to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;
        let user = User::new(
            name,
            cpf,
            clean_optional_string(request.email.take()).unwrap_or_default(),
            clean_optional_string(request.phone.take()).unwrap_or_default(),
            request.birthdate,
            password_hash,
        );

        // ID를 얻기 위해 사용자를 먼저 저장
        let created = self.stores.users.save(user).await?;
        let user_id = created.persisted_id().ok_or_else(|| {
            AppError::InternalError("사용자를 생성할 수 없습니다".to_string())
        })?;

        request.clear_dependent_ids();
        request.stamp_user_id(user_id);
        let writes = DependentWrites::take_from(&mut request);

        if let Err(e) = self.persist_dependents(writes).await {
            error!(
                "User {} was created but saving its dependents failed (no rollback): {}",
                user_id, e
            );
            return Err(e);
        }

        info!("Created user {} in {:?}", user_id, start_time.elapsed());
        Ok(user_id)
    }

    /// 사용자 정보를 병합 수정하고 종속 엔티티를 저장합니다.
    ///
    /// 빈 문자열과 `null` 필드는 기존 값을 유지합니다. 요청의 종속 엔티티
    /// ID가 이 사용자의 것이 아니면 아무것도 쓰지 않고 실패합니다.
    pub async fn update_user(&self, id: i64, mut request: UserWriteRequest) -> AppResult<i64> {
        let mut user = self.stores.users.find_by_id(id).await?.ok_or_else(|| {
            AppError::UnprocessableEntity(
                "제공된 ID에 해당하는 사용자가 없습니다".to_string(),
            )
        })?;

        request.stamp_user_id(id);
        let mut writes = DependentWrites::take_from(&mut request);

        // 1단계: 검증 (쓰기 없음)
        if let Some(account) = writes.account.as_mut() {
            resolve_single(self.stores.accounts.as_ref(), id, account).await?;
        }
        if let Some(card) = writes.card.as_mut() {
            resolve_single(self.stores.cards.as_ref(), id, card).await?;
        }
        if let Some(limit) = writes.limit_management.as_mut() {
            resolve_single(self.stores.limit_managements.as_ref(), id, limit).await?;
        }
        if let Some(goal) = writes.financial_goal.as_mut() {
            resolve_single(self.stores.financial_goals.as_ref(), id, goal).await?;
        }
        self.resolve_news(id, &mut writes.news).await?;

        if let Some(cpf) = request.changed_cpf() {
            if cpf != user.cpf {
                if let Some(owner) = self.stores.users.find_by_cpf(&cpf).await? {
                    if owner.id != user.id {
                        warn!("Rejected update of user {}: cpf belongs to another user", id);
                        return Err(AppError::ConflictError(
                            "이미 등록된 CPF입니다".to_string(),
                        ));
                    }
                }
            }
        }

        // 2단계: 병합
        request.apply_to(&mut user);
        if !request.password.is_empty() {
            user.password_hash = self.hash_password(&request.password)?;
        }
        user.touch();

        // 3단계: 쓰기
        self.stores.users.save(user).await?;

        if let Err(e) = self.persist_dependents(writes).await {
            error!(
                "User {} was updated but saving its dependents failed (no rollback): {}",
                id, e
            );
            return Err(e);
        }

        info!("Updated user {}", id);
        Ok(id)
    }

    /// 사용자와 모든 종속 엔티티를 삭제하고 삭제된 ID를 반환합니다.
    ///
    /// 종속 엔티티를 먼저 지우고 사용자를 마지막에 지웁니다.
    pub async fn delete_user(&self, id: i64) -> AppResult<i64> {
        if self.stores.users.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(
                "제공된 ID에 해당하는 사용자가 없습니다".to_string(),
            ));
        }

        let news_ids = ids_of(self.stores.news.find_by_user_id(id).await?);
        let limit_id = self
            .stores
            .limit_managements
            .find_one_by_user_id(id)
            .await?
            .and_then(|limit| limit.id());
        let goal_ids = ids_of(self.stores.financial_goals.find_by_user_id(id).await?);
        let card_id = self
            .stores
            .cards
            .find_one_by_user_id(id)
            .await?
            .and_then(|card| card.id());
        let account_id = self
            .stores
            .accounts
            .find_one_by_user_id(id)
            .await?
            .and_then(|account| account.id());

        let result = async {
            for news_id in news_ids {
                self.stores.news.delete_by_id(news_id).await?;
            }
            if let Some(limit_id) = limit_id {
                self.stores.limit_managements.delete_by_id(limit_id).await?;
            }
            for goal_id in goal_ids {
                self.stores.financial_goals.delete_by_id(goal_id).await?;
            }
            if let Some(card_id) = card_id {
                self.stores.cards.delete_by_id(card_id).await?;
            }
            if let Some(account_id) = account_id {
                self.stores.accounts.delete_by_id(account_id).await?;
            }
            self.stores.users.delete_by_id(id).await?;
            Ok::<(), AppError>(())
        }
        .await;

        if let Err(e) = result {
            error!("Deleting user {} stopped part way (no rollback): {}", id, e);
            return Err(e);
        }

        info!("Deleted user {} and its dependents", id);
        Ok(id)
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    /// 요청의 알림 ID가 모두 이 사용자의 알림인지 확인합니다.
    async fn resolve_news(&self, user_id: i64, incoming: &mut [News]) -> AppResult<()> {
        if incoming.is_empty() {
            return Ok(());
        }

        let existing = ids_of(self.stores.news.find_by_user_id(user_id).await?);
        for news in incoming.iter_mut() {
            match news.id.filter(|id| *id > 0) {
                Some(news_id) if !existing.contains(&news_id) => {
                    warn!("Rejected update of user {}: unknown news {}", user_id, news_id);
                    return Err(AppError::NotFound(format!(
                        "알림 ID {}를 찾을 수 없습니다",
                        news_id
                    )));
                }
                Some(_) => {}
                None => news.id = None,
            }
        }

        Ok(())
    }

    /// 알림, 한도 관리, 재무 목표, 카드, 계좌 순서로 저장합니다.
    async fn persist_dependents(&self, writes: DependentWrites) -> AppResult<()> {
        let DependentWrites {
            account,
            card,
            limit_management,
            financial_goal,
            news,
        } = writes;

        if !news.is_empty() {
            self.stores.news.save_all(news).await?;
        }
        if let Some(limit) = limit_management {
            self.stores.limit_managements.save(limit).await?;
        }
        if let Some(goal) = financial_goal {
            self.stores.financial_goals.save(goal).await?;
        }
        if let Some(card) = card {
            self.stores.cards.save(card).await?;
        }
        if let Some(account) = account {
            self.stores.accounts.save(account).await?;
        }

        Ok(())
    }
}

/// 사용자당 한 개인 종속 엔티티의 ID를 기존 레코드와 맞춥니다.
async fn resolve_single<T: UserOwned>(
    store: &dyn OwnedStore<T>,
    user_id: i64,
    incoming: &mut T,
) -> AppResult<()> {
    let existing = store.find_one_by_user_id(user_id).await?;

    match (incoming.id().filter(|id| *id > 0), existing) {
        (Some(id), Some(current)) if current.id() == Some(id) => Ok(()),
        (Some(id), _) => {
            warn!(
                "Rejected update of user {}: {} {} does not belong to the user",
                user_id,
                T::LABEL,
                id
            );
            Err(AppError::NotFound(format!(
                "사용자 {}의 {} ID {}를 찾을 수 없습니다",
                user_id,
                T::LABEL,
                id
            )))
        }
        (None, Some(current)) => {
            incoming.set_id(current.id());
            Ok(())
        }
        (None, None) => {
            incoming.set_id(None);
            Ok(())
        }
    }
}

fn ids_of<T: UserOwned>(rows: Vec<T>) -> Vec<i64> {
    rows.iter().filter_map(UserOwned::id).collect()
}
