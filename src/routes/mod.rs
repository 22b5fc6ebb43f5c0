//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 리소스별로 그룹화하여 제공합니다.
//! 사용자 집계, 종속 엔티티 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! ```text
//! /health
//! /api/v1/users                 GET, POST
//! /api/v1/users/{id}            GET, PUT, DELETE
//! /api/v1/accounts              GET(?userId=), POST
//! /api/v1/accounts/{id}         GET, PUT, DELETE
//! /api/v1/cards                 ...
//! /api/v1/limit-managements     ...
//! /api/v1/financial-goals       ...
//! /api/v1/news                  ...
//! ```
//!
//! 본문, 경로, 쿼리 파싱 실패도 `ValidationError`(400)로 변환되어
//! 다른 에러와 같은 응답 봉투로 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let services = AppServices::new(Stores::in_memory(), 4);
//! let app = App::new().configure(|cfg| configure_all_routes(cfg, &services));
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::domain::dto::dependents::{
    AccountDto, CardDto, DependentDto, FinancialGoalDto, LimitManagementDto, NewsDto,
};
use crate::domain::entities::{Account, Card, FinancialGoal, LimitManagement, News};
use crate::errors::errors::AppError;
use crate::handlers;
use crate::repositories::Stores;
use crate::services::dependents::DependentService;
use crate::services::users::UserService;

/// 라우트가 공유하는 서비스 묶음
#[derive(Clone)]
pub struct AppServices {
    pub users: web::Data<UserService>,
    pub accounts: web::Data<DependentService<Account>>,
    pub cards: web::Data<DependentService<Card>>,
    pub limit_managements: web::Data<DependentService<LimitManagement>>,
    pub financial_goals: web::Data<DependentService<FinancialGoal>>,
    pub news: web::Data<DependentService<News>>,
}

impl AppServices {
    pub fn new(stores: Stores, bcrypt_cost: u32) -> Self {
        Self {
            accounts: web::Data::new(DependentService::new(
                stores.users.clone(),
                stores.accounts.clone(),
            )),
            cards: web::Data::new(DependentService::new(
                stores.users.clone(),
                stores.cards.clone(),
            )),
            limit_managements: web::Data::new(DependentService::new(
                stores.users.clone(),
                stores.limit_managements.clone(),
            )),
            financial_goals: web::Data::new(DependentService::new(
                stores.users.clone(),
                stores.financial_goals.clone(),
            )),
            news: web::Data::new(DependentService::new(
                stores.users.clone(),
                stores.news.clone(),
            )),
            users: web::Data::new(UserService::new(stores, bcrypt_cost)),
        }
    }
}

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `services` - 핸들러에 주입할 서비스 묶음
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, services: &AppServices) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg, services);
    configure_dependent_routes(cfg, services);
}

/// 추출기 에러를 응답 봉투로 변환합니다
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("요청 본문을 해석할 수 없습니다: {}", err)).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 경로 매개변수: {}", err)).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("잘못된 쿼리 매개변수: {}", err)).into()
    }));
}

fn configure_user_routes(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(services.users.clone())
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_dependent_routes(cfg: &mut web::ServiceConfig, services: &AppServices) {
    cfg.service(dependent_scope::<AccountDto>(
        "/api/v1/accounts",
        services.accounts.clone(),
    ))
    .service(dependent_scope::<CardDto>(
        "/api/v1/cards",
        services.cards.clone(),
    ))
    .service(dependent_scope::<LimitManagementDto>(
        "/api/v1/limit-managements",
        services.limit_managements.clone(),
    ))
    .service(dependent_scope::<FinancialGoalDto>(
        "/api/v1/financial-goals",
        services.financial_goals.clone(),
    ))
    .service(dependent_scope::<NewsDto>(
        "/api/v1/news",
        services.news.clone(),
    ));
}

fn dependent_scope<D: DependentDto>(
    path: &str,
    service: web::Data<DependentService<D::Entity>>,
) -> actix_web::Scope {
    web::scope(path)
        .app_data(service)
        .route("", web::get().to(handlers::dependents::list::<D>))
        .route("", web::post().to(handlers::dependents::create::<D>))
        .route("/{id}", web::get().to(handlers::dependents::get::<D>))
        .route("/{id}", web::put().to(handlers::dependents::update::<D>))
        .route("/{id}", web::delete().to(handlers::dependents::delete::<D>))
}

#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "banking_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::{App, http::StatusCode, test};
    use serde_json::Value;

    use super::*;

    fn services() -> AppServices {
        AppServices::new(Stores::in_memory(), 4)
    }

    macro_rules! app {
        ($services:expr) => {{
            let services = $services;
            test::init_service(
                App::new().configure(move |cfg| configure_all_routes(cfg, &services)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = app!(services());

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_create_then_get_user() {
        let app = app!(services());

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({
                "cpf": "111",
                "name": "A",
                "password": "secret",
                "news": [{ "text": "hi" }]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 201);
        assert!(body["error"].is_null());
        let id = body["data"].as_i64().unwrap();
        assert!(id > 0);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["data"]["name"], "A");
        assert_eq!(body["data"]["news"][0]["text"], "hi");
        assert_eq!(body["data"]["news"][0]["userId"], id);
        assert!(body["data"].get("password").is_none());
        assert!(body["data"].get("passwordHash").is_none());
    }

    #[actix_web::test]
    async fn test_list_users_empty() {
        let app = app!(services());

        let req = test::TestRequest::get().uri("/api/v1/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"], json!([]));
        assert_eq!(body["statusCode"], 200);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_not_found_envelope() {
        let app = app!(services());

        let req = test::TestRequest::get().uri("/api/v1/users/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["data"].is_null());
        assert_eq!(body["statusCode"], 404);
        assert!(body["error"]["title"].is_string());
        assert!(body["error"]["detail"].is_string());
    }

    #[actix_web::test]
    async fn test_duplicate_cpf_is_unprocessable() {
        let app = app!(services());

        for expected in [StatusCode::CREATED, StatusCode::UNPROCESSABLE_ENTITY] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(json!({ "cpf": "111", "name": "A" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_update_missing_user_is_unprocessable() {
        let app = app!(services());

        let req = test::TestRequest::put()
            .uri("/api/v1/users/5")
            .set_json(json!({ "name": "B" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_update_and_delete_user() {
        let services = services();
        let id = services
            .users
            .create_user(crate::domain::dto::users::request::UserWriteRequest {
                name: Some("A".to_string()),
                cpf: Some("111".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let app = app!(services);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/{}", id))
            .set_json(json!({ "name": "B", "card": { "number": "4111", "limit": 10.0 } }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], id);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "B");
        assert_eq!(body["data"]["card"]["number"], "4111");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_with_null_fields_keeps_old_values() {
        let app = app!(services());

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({ "cpf": "111", "name": "A", "email": "old@x" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let id = body["data"].as_i64().unwrap();

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/users/{}", id))
            .set_json(json!({
                "name": null,
                "cpf": null,
                "email": "new@x",
                "password": null,
                "news": null,
                "card": { "userId": null, "number": "4111" }
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/users/{}", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["name"], "A");
        assert_eq!(body["data"]["cpf"], "111");
        assert_eq!(body["data"]["email"], "new@x");
        assert_eq!(body["data"]["card"]["userId"], id);
        assert_eq!(body["data"]["news"], json!([]));
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request_envelope() {
        let app = app!(services());

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = app!(services());

        let req = test::TestRequest::get().uri("/api/v1/users/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_dependent_crud() {
        let services = services();
        let user_id = services
            .users
            .create_user(crate::domain::dto::users::request::UserWriteRequest {
                name: Some("A".to_string()),
                cpf: Some("111".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();
        let app = app!(services);

        let req = test::TestRequest::post()
            .uri("/api/v1/news")
            .set_json(json!({ "userId": user_id, "text": "olá" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        let news_id = body["data"]["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news?userId={}", user_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::put()
            .uri(&format!("/api/v1/news/{}", news_id))
            .set_json(json!({ "text": "editado" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["text"], "editado");
        assert_eq!(body["data"]["userId"], user_id);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/v1/news/{}", news_id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"], news_id);

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/news/{}", news_id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_dependent_for_unknown_user_is_unprocessable() {
        let app = app!(services());

        let req = test::TestRequest::post()
            .uri("/api/v1/cards")
            .set_json(json!({ "userId": 42, "number": "4111" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
