//! Error responses as they appear in the OpenAPI document.

use super::{ErrorBody, ErrorsBody};
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Validation failed, one error per invalid field",
    content_type = "application/json",
    example = json!({
        "errors": [{
            "msg": "Price must be greater than 0",
            "path": "price",
            "location": "body"
        }]
    })
)]
pub struct ValidationErrorResponse(pub ErrorsBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "error": "Product not found"
    })
)]
pub struct NotFoundResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "error": "Internal server error"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorBody);
