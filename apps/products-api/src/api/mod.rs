//! HTTP route assembly.

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes that `create_router` nests under the `/api` prefix.
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

/// Root-level `/ready` probe backed by live database checks.
pub fn ready_router(state: AppState) -> Router {
    health::router(state)
}
