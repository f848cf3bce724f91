//! HTTP toolkit shared by the workspace's Axum services.
//!
//! [`server`] owns router assembly and the production runtime: OpenAPI
//! docs, CORS from `FRONTEND_URL`, security headers, request tracing,
//! health endpoints and coordinated shutdown. The wire contract lives
//! next to it: [`responses`] defines the `data` success envelope,
//! [`errors`] the error bodies every API returns, and [`extractors`]
//! the integer id path and rule-validated JSON extractors that feed
//! those error bodies.
//!
//! See the [`server`] module doc for how a service composes the pieces.

pub mod errors;
pub mod extractors;
pub mod http;
pub mod responses;
pub mod server;

pub use errors::{ApiError, ErrorBody, ErrorsBody, FieldError};
pub use extractors::{IdPath, ValidateRules, ValidatedJson};
pub use http::security_headers;
pub use responses::DataBody;
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, close_postgres,
    create_production_app, create_router, health_router, run_health_checks,
};
