//! Plain HTTP middleware.
//!
//! Today that is just the security headers; CORS is wired up inside
//! `server::create_router` from the frontend origin in the environment.

pub mod security;

pub use security::security_headers;
