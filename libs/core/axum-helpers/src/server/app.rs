use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::security::security_headers;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Builds the CORS layer for the single origin named by `FRONTEND_URL`.
///
/// The variable is required so a deployment cannot come up with every
/// cross-origin request silently blocked. Allowed methods cover the
/// full CRUD set plus OPTIONS preflight; credentialed requests are
/// permitted and preflight results may be cached for an hour.
fn cors_from_env() -> io::Result<CorsLayer> {
    let raw = std::env::var("FRONTEND_URL").map_err(|_| {
        invalid_input(
            "FRONTEND_URL environment variable is required. \
             Example: FRONTEND_URL=http://localhost:5173"
                .to_string(),
        )
    })?;

    let origin = raw.trim();
    if origin.is_empty() {
        return Err(invalid_input("FRONTEND_URL cannot be empty".to_string()));
    }

    let origin = origin
        .parse::<HeaderValue>()
        .map_err(|e| invalid_input(format!("Invalid FRONTEND_URL value: {}", e)))?;

    info!("CORS allows requests from {}", raw.trim());

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Wraps API routes with the crate's standard middleware and docs.
///
/// The returned router serves Swagger UI at `/docs`, the OpenAPI
/// document at `/api-docs/openapi.json`, and the supplied routes nested
/// under `/api`. Requests that match nothing fall through to a JSON
/// 404. Every response passes through request tracing, security
/// headers, CORS and compression.
///
/// CORS allows exactly one origin, read from the `FRONTEND_URL`
/// environment variable (for example `http://localhost:5173`). Setup
/// fails when the variable is missing, empty, or not a valid origin.
///
/// The supplied routes should already carry their state; this function
/// only adds cross-cutting concerns.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::create_router;
///
/// #[derive(utoipa::OpenApi)]
/// #[openapi(paths(list_products))]
/// struct Docs;
///
/// // FRONTEND_URL must be set before this call
/// let router = create_router::<Docs>(api_routes).await?;
/// ```
pub async fn create_router<T>(apis: Router) -> io::Result<Router>
where
    T: OpenApi + 'static,
{
    let cors = cors_from_env()?;

    let router = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new());

    Ok(router)
}

/// Runs the server until SIGINT or SIGTERM, then runs `cleanup`.
///
/// In-flight requests are drained while `cleanup` closes connections.
/// Cleanup that takes longer than `shutdown_timeout` is abandoned so a
/// stuck pool cannot keep the process alive.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{close_postgres, create_production_app};
///
/// create_production_app(app, &config.server, std::time::Duration::from_secs(30), async move {
///     close_postgres(db, "api").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Listening on {}", listener.local_addr()?);

    // The cleanup task owns the signal listener; the server drains via
    // the broadcast receiver once shutdown is triggered.
    let (coordinator, mut shutdown_rx) = ShutdownCoordinator::new();

    let cleanup_task = tokio::spawn({
        let coordinator = coordinator.clone();
        async move {
            coordinator.wait_for_signal().await;

            info!("Running cleanup (timeout {:?})", shutdown_timeout);
            match tokio::time::timeout(shutdown_timeout, cleanup).await {
                Ok(()) => info!("Cleanup finished"),
                Err(_) => {
                    tracing::warn!("Cleanup did not finish within {:?}", shutdown_timeout);
                }
            }
        }
    });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.recv().await;
        })
        .await
        .inspect_err(|e| {
            tracing::error!("Server error: {:?}", e);
        });

    cleanup_task.await.ok();

    serve_result
}
