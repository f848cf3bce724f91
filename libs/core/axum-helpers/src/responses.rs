//! Standard success envelope for API responses.

use serde::Serialize;
use utoipa::ToSchema;

/// Wrapper placing every successful payload under a `data` key.
///
/// All success responses use this envelope so clients can parse
/// `{ "data": ... }` uniformly, whether the payload is a resource,
/// a list, or a plain confirmation message.
///
/// # Example
/// ```ignore
/// use axum::Json;
/// use axum_helpers::responses::DataBody;
///
/// async fn list() -> Json<DataBody<Vec<Product>>> {
///     Json(DataBody::new(products))
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
