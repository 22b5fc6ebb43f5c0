//! 공통 응답 봉투
//!
//! 모든 API는 성공과 실패 모두 같은 모양의 JSON을 반환합니다.
//!
//! ```json
//! { "data": 42, "error": null, "statusCode": 201 }
//! { "data": null, "error": { "title": "...", "detail": "..." }, "statusCode": 422 }
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

/// 에러 본문
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 짧은 제목
    pub title: String,
    /// 상세 설명
    pub detail: String,
}

impl ErrorResponse {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
        }
    }
}

/// 응답 봉투
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub error: Option<ErrorResponse>,
    pub status_code: u16,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, status: StatusCode) -> Self {
        Self {
            data: Some(data),
            error: None,
            status_code: status.as_u16(),
        }
    }

    /// 200 OK
    pub fn ok(data: T) -> Self {
        Self::success(data, StatusCode::OK)
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self::success(data, StatusCode::CREATED)
    }

    pub fn failure(error: ErrorResponse, status: StatusCode) -> Self {
        Self {
            data: None,
            error: Some(error),
            status_code: status.as_u16(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// 봉투의 `statusCode`를 HTTP 상태로 사용해 응답을 만듭니다.
    pub fn into_http_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        HttpResponse::build(status).json(self)
    }
}
