//! Products API - REST server over PostgreSQL

use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!("Connecting to PostgreSQL at {}", config.postgres.url());

    // Connect to PostgreSQL with retry
    let db = database::postgres::connect_from_config_with_retry(config.postgres.clone(), None)
        .await?;

    // Create the products table if it does not exist yet
    domain_products::ensure_schema(&db).await?;

    let state = AppState { config, db };

    // Build REST router with OpenAPI docs, then hang the probes off the root
    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;
    let app = router
        .merge(health_router(state.config.app.clone()))
        .merge(api::ready_router(state.clone()));

    info!("Starting Products API on port {}", state.config.server.port);

    // Run with graceful shutdown
    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing PostgreSQL connection");
            close_postgres(state.db, "products-api").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API stopped");
    Ok(())
}
