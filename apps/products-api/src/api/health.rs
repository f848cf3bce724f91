//! Readiness probes that exercise the real database.

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};

use crate::state::AppState;

/// Router exposing `/ready`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(state)
}

/// Answers 200 only when PostgreSQL responds and the products table is reachable.
async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![
        (
            "postgres",
            Box::pin(async {
                database::postgres::check_health(&state.db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
        (
            "products_table",
            Box::pin(async {
                database::postgres::check_health_with_query(
                    &state.db,
                    "SELECT 1 FROM products LIMIT 1",
                )
                .await
                .map_err(|e| e.to_string())
            }),
        ),
    ];

    match run_health_checks(checks).await {
        Ok(reply) | Err(reply) => reply.into_response(),
    }
}
