//! OpenAPI document for the Products API.

use utoipa::OpenApi;

/// Top-level OpenAPI document. Domain paths are nested under `/api`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Manage the product catalog over REST",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:4000", description = "Local development")
    ),
    nest(
        (path = "/api/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product catalog operations")
    )
)]
pub struct ApiDoc;
