use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorBody, messages};

/// JSON 404 used as the router fallback.
pub async fn not_found() -> Response {
    let body = Json(ErrorBody {
        error: messages::RESOURCE_NOT_FOUND.to_string(),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}
