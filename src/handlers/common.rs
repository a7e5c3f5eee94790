use crate::errors::{ApiError, ServiceError};
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

fn bad_request(message: String, error_code: &str) -> ApiError {
    ApiError::BadRequest {
        message,
        error_code: Some(error_code.to_string()),
    }
}

/// `Query` extractor whose rejections render as `ErrorResponse`
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| Self(value))
            .map_err(|rejection| bad_request(rejection.body_text(), "invalid_query"))
    }
}

/// `Path` extractor whose rejections render as `ErrorResponse`
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<T>::from_request_parts(parts, state)
            .await
            .map(|Path(value)| Self(value))
            .map_err(|rejection| bad_request(rejection.body_text(), "invalid_path"))
    }
}

/// `Json` body extractor whose rejections render as `ErrorResponse`
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| Self(value))
            .map_err(|rejection| bad_request(rejection.body_text(), "invalid_body"))
    }
}

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard created response
pub fn created_response<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// Validate request input
pub fn validate_input<T: Validate>(input: &T) -> Result<(), ApiError> {
    input
        .validate()
        .map_err(|e| ApiError::ValidationError(format!("Validation failed: {}", e)))
}

/// Map service errors to API errors
pub fn map_service_error(err: ServiceError) -> ApiError {
    ApiError::ServiceError(err)
}

/// Trims a query value, treating blank input as absent
pub fn normalize_optional_string(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .and_then(|v| if v.is_empty() { None } else { Some(v) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct PageInput {
        #[validate(range(min = 1))]
        page: u32,
    }

    #[test]
    fn validate_input_reports_bad_fields() {
        assert!(validate_input(&PageInput { page: 1 }).is_ok());
        assert!(matches!(
            validate_input(&PageInput { page: 0 }),
            Err(ApiError::ValidationError(msg)) if msg.contains("page")
        ));
    }

    #[test]
    fn blank_strings_are_absent() {
        assert_eq!(normalize_optional_string(Some("  ".into())), None);
        assert_eq!(
            normalize_optional_string(Some(" kibble ".into())),
            Some("kibble".to_string())
        );
        assert_eq!(normalize_optional_string(None), None);
    }
}
