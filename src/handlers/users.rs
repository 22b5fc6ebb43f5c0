//! # User Aggregate HTTP Handlers
//!
//! 사용자 집계에 대한 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 모든 응답은 [`ApiResponse`] 봉투로 감싸집니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 `data` | 상태 코드 |
//! |--------|------|------|-------------|-----------|
//! | `GET` | `/users` | 사용자 집계 목록 | `UserResponse[]` | 200 OK |
//! | `GET` | `/users/{id}` | 사용자 집계 조회 | `UserResponse` | 200 OK |
//! | `POST` | `/users` | 사용자 + 종속 엔티티 생성 | 새 ID | 201 Created |
//! | `PUT` | `/users/{id}` | 병합 수정 | ID | 200 OK |
//! | `DELETE` | `/users/{id}` | 사용자 + 종속 엔티티 삭제 | 삭제된 ID | 200 OK |
//!
//! ## 에러 응답
//!
//! ```json
//! {
//!   "data": null,
//!   "error": { "title": "리소스를 찾을 수 없습니다", "detail": "..." },
//!   "statusCode": 404
//! }
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::UserWriteRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::errors::errors::AppError;
use crate::services::users::UserService;

#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users: Vec<UserResponse> = service
        .list_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(ApiResponse::ok(users).into_http_response())
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(user_id.into_inner()).await?;

    Ok(ApiResponse::ok(UserResponse::from(user)).into_http_response())
}

#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<UserWriteRequest>,
) -> Result<HttpResponse, AppError> {
    let id = service.create_user(payload.into_inner()).await?;

    Ok(ApiResponse::created(id).into_http_response())
}

/// 경로의 ID가 수정 대상입니다. 본문의 `id`는 무시됩니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
    payload: web::Json<UserWriteRequest>,
) -> Result<HttpResponse, AppError> {
    let id = service
        .update_user(user_id.into_inner(), payload.into_inner())
        .await?;

    Ok(ApiResponse::ok(id).into_http_response())
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let id = service.delete_user(user_id.into_inner()).await?;

    Ok(ApiResponse::ok(id).into_http_response())
}
