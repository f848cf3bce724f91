//! Test infrastructure shared across the workspace.
//!
//! - [`TestDatabase`]: throwaway PostgreSQL container per test (feature
//!   `postgres`, on by default)
//! - [`TestDataBuilder`]: reproducible test data derived from a seed
//! - [`assertions`]: small assertion helpers
//!
//! ```rust,no_run
//! use test_utils::{TestDatabase, TestDataBuilder};
//!
//! #[tokio::test]
//! async fn test_creates_a_product() {
//!     let db = TestDatabase::new().await;
//!     let data = TestDataBuilder::from_test_name("test_creates_a_product");
//!
//!     let name = data.name("product", "main");
//!     let price = data.price();
//! }
//! ```

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

#[cfg(feature = "postgres")]
mod postgres;

#[cfg(feature = "postgres")]
pub use postgres::TestDatabase;

/// Derives every generated value from one seed, so a test fed the same
/// seed sees identical data on every run.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeds the builder by hashing the test's name. Data stays stable
    /// across runs yet distinct between tests.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let data = TestDataBuilder::from_test_name("creates_a_product");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// A name like `product-12345-main`: the prefix says what kind of
    /// record it is, the suffix tells instances within a test apart.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("{}-{}-{}", prefix, self.seed, suffix)
    }

    /// A strictly positive price between 1.00 and 100.00.
    pub fn price(&self) -> f64 {
        ((self.seed % 9_900) + 100) as f64 / 100.0
    }
}

/// Assertion helpers for test code.
pub mod assertions {
    /// Unwraps an `Option`, panicking with `context` when it is `None`.
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        match value {
            Some(inner) => inner,
            None => panic!("{}: value was None", context),
        }
    }
}
