use crate::common::DatabaseError;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

/// Verifies the connection with a `SELECT 1` round trip.
///
/// # Example
/// ```ignore
/// use database::postgres::check_health;
///
/// // In a readiness endpoint
/// check_health(&db).await?;
/// ```
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    check_health_with_query(db, "SELECT 1").await
}

/// Runs an arbitrary probe query against the connection.
///
/// Use this to assert on state beyond pure connectivity, for example
/// that an expected table exists:
///
/// ```ignore
/// use database::postgres::check_health_with_query;
///
/// check_health_with_query(&db, "SELECT 1 FROM products LIMIT 1").await?;
/// ```
pub async fn check_health_with_query(
    db: &DatabaseConnection,
    query: &str,
) -> Result<(), DatabaseError> {
    debug!(query, "Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, query.to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|source| DatabaseError::HealthCheckFailed {
            query: query.to_string(),
            source,
        })?;

    debug!(query, "PostgreSQL health check passed");
    Ok(())
}

// Health checks need a live database; they are exercised by the app's
// integration suites.
