pub mod handlers;
pub mod messages;
pub mod responses;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// A single failed validation rule.
///
/// Mirrors the shape clients already parse from validation middleware:
/// the failed rule's message, the field it applies to, and where the
/// field came from (`body` for JSON fields, `params` for path parameters).
///
/// # Wire shape
///
/// ```json
/// {
///   "msg": "Price must be greater than 0",
///   "path": "price",
///   "location": "body"
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct FieldError {
    /// Human-readable message for the failed rule
    #[schema(example = "Price must be greater than 0")]
    pub msg: String,
    /// Field or parameter the rule applies to
    #[schema(example = "price")]
    pub path: String,
    /// Request part the field came from ("body" or "params")
    #[schema(example = "body")]
    pub location: String,
}

impl FieldError {
    /// Failed rule on a JSON body field.
    pub fn body(path: &str, msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            path: path.to_string(),
            location: "body".to_string(),
        }
    }

    /// Failed rule on a path parameter.
    pub fn params(path: &str, msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
            path: path.to_string(),
            location: "params".to_string(),
        }
    }
}

/// Error payload listing every failed validation rule.
///
/// Returned with status 400 whenever request validation fails.
#[derive(Serialize, ToSchema)]
pub struct ErrorsBody {
    pub errors: Vec<FieldError>,
}

/// Error payload carrying a single message.
///
/// Returned for 404 and 500 responses.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Internal server error")]
    pub error: String,
}

/// What an API call can fail with, expressed as an HTTP response.
///
/// Validation failures map to 400 with the full list of failed rules,
/// missing resources map to 404, and anything unexpected collapses to a
/// generic 500 so internals never leak to clients.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("Request validation failed")]
    Validation(Vec<FieldError>),

    #[error("{0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                tracing::info!("Request validation failed: {:?}", errors);
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            ApiError::NotFound(message) => {
                tracing::info!("Not found: {}", message);
                (StatusCode::NOT_FOUND, Json(ErrorBody { error: message })).into_response()
            }
            ApiError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error_response()
            }
            ApiError::Internal(message) => {
                tracing::error!("Internal server error: {}", message);
                internal_error_response()
            }
        }
    }
}

fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: messages::INTERNAL_ERROR.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use serde_json::Value;

    async fn response_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_field_error_body_location() {
        let error = FieldError::body("name", "Name is required");
        assert_eq!(error.path, "name");
        assert_eq!(error.msg, "Name is required");
        assert_eq!(error.location, "body");
    }

    #[test]
    fn test_field_error_params_location() {
        let error = FieldError::params("id", messages::ID_NOT_INTEGER);
        assert_eq!(error.path, "id");
        assert_eq!(error.location, "params");
    }

    #[tokio::test]
    async fn test_validation_error_returns_400_with_errors_array() {
        let error = ApiError::Validation(vec![
            FieldError::body("name", "Name is required"),
            FieldError::body("price", "Price must be a number"),
        ]);

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_json(response).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0]["msg"], "Name is required");
        assert_eq!(errors[0]["path"], "name");
        assert_eq!(errors[0]["location"], "body");
    }

    #[tokio::test]
    async fn test_not_found_returns_404_with_message() {
        let error = ApiError::NotFound("Product not found".to_string());

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response_json(response).await;
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_database_error_returns_generic_500() {
        let error = ApiError::Database(DbErr::Custom("connection reset".to_string()));

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internals must never leak into the response body
        let body = response_json(response).await;
        assert_eq!(body["error"], messages::INTERNAL_ERROR);
    }

    #[tokio::test]
    async fn test_internal_error_returns_generic_500() {
        let error = ApiError::Internal("state poisoned".to_string());

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response_json(response).await;
        assert_eq!(body["error"], messages::INTERNAL_ERROR);
    }
}
