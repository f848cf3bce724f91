//! Shared application state.

use sea_orm::DatabaseConnection;

use crate::config::Config;

/// State handed to every request handler.
///
/// Cloning is cheap: the SeaORM connection wraps a pooled handle.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
}
