/// Errors surfaced by the database helpers.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Underlying SeaORM failure.
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// A readiness probe query failed.
    #[cfg(feature = "postgres")]
    #[error("Health check query '{query}' failed: {source}")]
    HealthCheckFailed {
        query: String,
        source: sea_orm::DbErr,
    },
}
