//! Product catalog domain: models, validation, service and HTTP handlers.
//!
//! The layering follows the rest of the workspace: handlers speak HTTP
//! and delegate to [`ProductService`], which applies the business rules
//! and talks to storage through the [`ProductRepository`] trait. The
//! PostgreSQL implementation lives in [`postgres`]; tests swap in the
//! in-memory one.
//!
//! ```rust,no_run
//! use domain_products::{InMemoryProductRepository, ProductService, handlers};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validate;

pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{CreateProduct, Product, UpdateProduct};
pub use postgres::{PgProductRepository, ensure_schema};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
