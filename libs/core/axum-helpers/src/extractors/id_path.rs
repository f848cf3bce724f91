//! Integer path parameter extractor with a normalized error message.

use crate::errors::{ApiError, FieldError, messages};
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

/// Extractor for integer `id` path parameters.
///
/// Parses the `id` segment as an `i32`. Anything that is not an integer
/// (including numbers with a fractional part and values outside the
/// column's range) rejects the request with a single validation error.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::IdPath;
///
/// async fn get_product(IdPath(id): IdPath) -> String {
///     format!("Product ID: {}", id)
/// }
///
/// let app = Router::new().route("/products/{id}", get(get_product));
/// ```
pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid_id())?;

        id.parse::<i32>().map(IdPath).map_err(|_| invalid_id())
    }
}

fn invalid_id() -> ApiError {
    ApiError::Validation(vec![FieldError::params("id", messages::ID_NOT_INTEGER)])
}
