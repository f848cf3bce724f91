//! Helpers shared by every backend: the error type and connection retry.

pub mod error;
pub mod retry;

pub use error::DatabaseError;
pub use retry::{RetryConfig, retry_with_backoff};
