//! 종속 엔티티 데이터 액세스 계층
//!
//! Account, Card, LimitManagement, FinancialGoal, News는 모두 같은 제네릭
//! 리포지토리 [`MongoOwnedRepository<T>`](owned_repo::MongoOwnedRepository)를 사용합니다.
//! 컬렉션 이름은 엔티티의 [`UserOwned::COLLECTION`](crate::domain::entities::UserOwned::COLLECTION)입니다.

pub mod owned_repo;
