//! 종속 엔티티 HTTP 핸들러
//!
//! 계좌, 카드, 한도 관리, 재무 목표, 알림은 같은 모양의 CRUD 엔드포인트를
//! 가지므로 DTO 타입으로 매개변수화된 제네릭 핸들러 하나로 처리합니다.
//! 등록은 `routes::dependent_scope`에서 합니다.
//!
//! | 메서드 | 경로 | 상태 코드 |
//! |--------|------|-----------|
//! | `GET` | `/{resource}?userId=` | 200 OK |
//! | `POST` | `/{resource}` | 201 Created |
//! | `GET` | `/{resource}/{id}` | 200 OK |
//! | `PUT` | `/{resource}/{id}` | 200 OK |
//! | `DELETE` | `/{resource}/{id}` | 200 OK |

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::dependents::DependentDto;
use crate::errors::errors::AppError;
use crate::services::dependents::DependentService;

/// 목록 조회 쿼리
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerQuery {
    pub user_id: Option<i64>,
}

pub async fn list<D: DependentDto>(
    service: web::Data<DependentService<D::Entity>>,
    query: web::Query<OwnerQuery>,
) -> Result<HttpResponse, AppError> {
    let items: Vec<D> = service
        .list(query.into_inner().user_id)
        .await?
        .into_iter()
        .map(D::from_entity)
        .collect();

    Ok(ApiResponse::ok(items).into_http_response())
}

pub async fn get<D: DependentDto>(
    service: web::Data<DependentService<D::Entity>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let entity = service.get(id.into_inner()).await?;

    Ok(ApiResponse::ok(D::from_entity(entity)).into_http_response())
}

pub async fn create<D: DependentDto>(
    service: web::Data<DependentService<D::Entity>>,
    payload: web::Json<D>,
) -> Result<HttpResponse, AppError> {
    let created = service.create(payload.into_inner().into_entity()).await?;

    Ok(ApiResponse::created(D::from_entity(created)).into_http_response())
}

pub async fn update<D: DependentDto>(
    service: web::Data<DependentService<D::Entity>>,
    id: web::Path<i64>,
    payload: web::Json<D>,
) -> Result<HttpResponse, AppError> {
    let updated = service
        .update(id.into_inner(), payload.into_inner().into_entity())
        .await?;

    Ok(ApiResponse::ok(D::from_entity(updated)).into_http_response())
}

pub async fn delete<D: DependentDto>(
    service: web::Data<DependentService<D::Entity>>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let deleted = service.delete(id.into_inner()).await?;

    Ok(ApiResponse::ok(deleted).into_http_response())
}
