//! Logging and error-report setup shared by every binary.

use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Installs color-eyre so startup failures print with source locations.
///
/// Call it first in `main`, before anything fallible. Calling it again
/// (as tests do) is a no-op.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default log directives when `RUST_LOG` is not set.
///
/// Production keeps request logs from `tower_http` while quieting
/// SeaORM's per-query output; development turns most things up.
fn default_directives(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,tower_http=info,sea_orm=warn"
    } else {
        "debug,tower_http=debug"
    }
}

/// Initializes the tracing subscriber for the given environment.
///
/// Production (`APP_ENV=production`) logs single-line JSON suitable for
/// log aggregation; development logs pretty-printed output for humans.
/// Both attach `tracing_error::ErrorLayer` so eyre reports carry span
/// traces, and both honor `RUST_LOG` over the built-in defaults.
///
/// Safe to call more than once; later calls leave the existing
/// subscriber in place, which is what tests want.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(environment)));

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(()) => info!("Tracing initialized for {:?}", environment),
        Err(_) => debug!("Tracing already initialized, keeping existing subscriber"),
    }
}
