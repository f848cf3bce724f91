//! Wires the products domain into the HTTP router.

use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

/// Build the `/products` routes backed by PostgreSQL.
pub fn router(state: &AppState) -> Router {
    let service = ProductService::new(PgProductRepository::new(state.db.clone()));
    handlers::router(service)
}
