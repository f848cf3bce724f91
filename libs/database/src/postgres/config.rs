use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_or_default, env_required};

/// Connection pool settings for PostgreSQL.
///
/// Build one manually for tests, or load it from the environment with
/// `FromEnv` (requires the `config` feature):
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::PostgresConfig;
///
/// let config = PostgresConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Connection string, from `DATABASE_URL`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    /// Log SQL statements through sqlx (at debug level).
    pub sqlx_logging: bool,
}

impl PostgresConfig {
    /// Pool with default settings for the given connection string.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// The configured connection string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Translates the settings into SeaORM `ConnectOptions`.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(&self.url);
        options
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(self.connect_timeout)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .max_lifetime(self.max_lifetime)
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(LevelFilter::Debug);
        options
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: 100,
            min_connections: 5,
            connect_timeout: Duration::from_secs(8),
            acquire_timeout: Duration::from_secs(8),
            idle_timeout: Duration::from_secs(8),
            max_lifetime: Duration::from_secs(8),
            sqlx_logging: true,
        }
    }
}

/// Parses an optional environment variable, reporting the key on failure.
#[cfg(feature = "config")]
fn env_parsed<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env_or_default(key, default)
        .parse()
        .map_err(|e: T::Err| ConfigError::ParseError {
            key: key.to_string(),
            details: e.to_string(),
        })
}

/// Loads the pool settings from the environment.
///
/// `DATABASE_URL` is required. The rest fall back to the pool defaults:
/// `DB_MAX_CONNECTIONS`, `DB_MIN_CONNECTIONS`, `DB_CONNECT_TIMEOUT_SECS`,
/// `DB_ACQUIRE_TIMEOUT_SECS`, `DB_IDLE_TIMEOUT_SECS`,
/// `DB_MAX_LIFETIME_SECS`, and `DB_SQLX_LOGGING`.
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env_required("DATABASE_URL")?,
            max_connections: env_parsed("DB_MAX_CONNECTIONS", "100")?,
            min_connections: env_parsed("DB_MIN_CONNECTIONS", "5")?,
            connect_timeout: Duration::from_secs(env_parsed("DB_CONNECT_TIMEOUT_SECS", "8")?),
            acquire_timeout: Duration::from_secs(env_parsed("DB_ACQUIRE_TIMEOUT_SECS", "8")?),
            idle_timeout: Duration::from_secs(env_parsed("DB_IDLE_TIMEOUT_SECS", "8")?),
            max_lifetime: Duration::from_secs(env_parsed("DB_MAX_LIFETIME_SECS", "8")?),
            sqlx_logging: env_parsed("DB_SQLX_LOGGING", "true")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_pool_defaults() {
        let config = PostgresConfig::new("postgresql://localhost/app");
        assert_eq!(config.url(), "postgresql://localhost/app");
        assert_eq!(config.max_connections, 100);
        assert_eq!(config.min_connections, 5);
        assert_eq!(config.connect_timeout, Duration::from_secs(8));
    }

    #[test]
    fn test_connect_options_builds() {
        let mut config = PostgresConfig::new("postgresql://localhost/app");
        config.sqlx_logging = false;
        let _ = config.connect_options();
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_requires_only_the_url() {
        temp_env::with_var("DATABASE_URL", Some("postgresql://localhost/app"), || {
            let config = PostgresConfig::from_env().unwrap();
            assert_eq!(config.url(), "postgresql://localhost/app");
            assert_eq!(config.max_connections, 100);
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_reads_pool_overrides() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/app")),
                ("DB_MAX_CONNECTIONS", Some("40")),
                ("DB_MIN_CONNECTIONS", Some("2")),
                ("DB_IDLE_TIMEOUT_SECS", Some("30")),
                ("DB_SQLX_LOGGING", Some("false")),
            ],
            || {
                let config = PostgresConfig::from_env().unwrap();
                assert_eq!(config.max_connections, 40);
                assert_eq!(config.min_connections, 2);
                assert_eq!(config.idle_timeout, Duration::from_secs(30));
                assert!(!config.sqlx_logging);
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_without_url_fails() {
        temp_env::with_var_unset("DATABASE_URL", || {
            let err = PostgresConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("DATABASE_URL"));
        });
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_rejects_unparseable_numbers() {
        temp_env::with_vars(
            [
                ("DATABASE_URL", Some("postgresql://localhost/app")),
                ("DB_MAX_CONNECTIONS", Some("many")),
            ],
            || {
                let err = PostgresConfig::from_env().unwrap_err();
                assert!(err.to_string().contains("DB_MAX_CONNECTIONS"));
            },
        );
    }
}
