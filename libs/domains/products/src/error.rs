//! Domain error type and its mapping onto HTTP responses.

use axum::response::{IntoResponse, Response};
use axum_helpers::{ApiError, FieldError};
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product {0} not found")]
    NotFound(i32),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Flattens domain failures into the shared API error shape.
impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) => ApiError::NotFound("Product not found".to_string()),
            ProductError::Validation(msg) => {
                ApiError::Validation(vec![FieldError::body("body", &msg)])
            }
            ProductError::Database(err) => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        ApiError::from(self).into_response()
    }
}
