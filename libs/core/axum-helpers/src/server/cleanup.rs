//! Connection cleanup for graceful shutdown.

use tracing::{error, info};

/// Closes a SeaORM connection pool, logging the outcome.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "products-api").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(()) => info!("PostgreSQL pool '{}' closed", name),
        Err(e) => error!("Failed to close PostgreSQL pool '{}': {}", name, e),
    }
}
