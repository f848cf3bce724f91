//! JSON extractor that runs ordered validation rules before deserialization.

use crate::errors::{ApiError, FieldError};
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Ordered validation rules evaluated against the raw JSON body.
///
/// Implementors inspect the body as `serde_json::Value` and return every
/// failed rule in field declaration order, reporting at most one failure
/// per field (the first rule that failed for it).
///
/// Rules run before deserialization, so missing fields and wrong types
/// produce the same structured errors as out-of-range values instead of
/// opaque serde messages.
pub trait ValidateRules {
    fn validate_rules(body: &Value) -> Vec<FieldError>;
}

/// JSON extractor with rule-based validation.
///
/// Parses the request body to raw JSON, runs the target type's
/// validation rules, and only deserializes into `T` once every rule has
/// passed. Failures reject the request with a 400 response listing the
/// failed rules.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::{ValidatedJson, ValidateRules};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateProduct {
///     name: String,
///     price: f64,
/// }
///
/// impl ValidateRules for CreateProduct {
///     fn validate_rules(body: &serde_json::Value) -> Vec<FieldError> {
///         // check name, then price, in declaration order
///         # vec![]
///     }
/// }
///
/// async fn create(ValidatedJson(payload): ValidatedJson<CreateProduct>) -> String {
///     format!("Creating product: {}", payload.name)
/// }
///
/// let app = Router::new().route("/products", post(create));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + ValidateRules,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|e| ApiError::Validation(vec![FieldError::body("body", &e.body_text())]))?;

        let errors = T::validate_rules(&body);
        if !errors.is_empty() {
            return Err(ApiError::Validation(errors));
        }

        let data = serde_json::from_value(body)
            .map_err(|e| ApiError::Validation(vec![FieldError::body("body", &e.to_string())]))?;

        Ok(ValidatedJson(data))
    }
}
