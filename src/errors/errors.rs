//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 클라이언트에게 동일한 응답 봉투(envelope)로 전달됩니다.
//!
//! ```json
//! { "data": null, "error": { "title": "...", "detail": "..." }, "statusCode": 404 }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn create_user(request: UserWriteRequest) -> Result<i64, AppError> {
//!     if stores.users.exists_by_cpf(&request.cpf).await? {
//!         return Err(AppError::ConflictError("이미 등록된 CPF입니다".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::api_response::{ApiResponse, ErrorResponse};

/// 애플리케이션 전역 에러 타입
///
/// 서비스 계층에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답 봉투로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 중복 데이터 에러 (422 Unprocessable Entity)
    ///
    /// 같은 CPF로 두 번째 사용자를 등록하려는 경우 등에 사용됩니다.
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 처리할 수 없는 요청 (422 Unprocessable Entity)
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 봉투에 들어갈 짧은 제목
    pub fn title(&self) -> &'static str {
        match self {
            AppError::DatabaseError(_) => "데이터베이스 오류",
            AppError::ValidationError(_) => "잘못된 요청",
            AppError::NotFound(_) => "리소스를 찾을 수 없습니다",
            AppError::ConflictError(_) => "중복된 데이터",
            AppError::UnprocessableEntity(_) => "처리할 수 없는 요청",
            AppError::InternalError(_) => "오류가 발생했습니다",
        }
    }

    /// 응답 봉투에 들어갈 상세 설명
    pub fn detail(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::UnprocessableEntity(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 에러를 응답 봉투의 에러 본문으로 변환합니다.
    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.title(), self.detail())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) | AppError::UnprocessableEntity(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 응답 봉투로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        actix_web::HttpResponse::build(status)
            .json(ApiResponse::<()>::failure(self.to_error_response(), status))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("CPF는 필수입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("User not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_maps_to_unprocessable_entity() {
        let error = AppError::ConflictError("Duplicate cpf".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_unprocessable_entity_response() {
        let error = AppError::UnprocessableEntity("User does not exist".to_string());

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_body_is_envelope() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let body = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert!(json["data"].is_null());
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["error"]["title"], "리소스를 찾을 수 없습니다");
        assert_eq!(json["error"]["detail"], "사용자를 찾을 수 없습니다");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        assert!(app_result.is_err());
        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
