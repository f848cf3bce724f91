//! Exponential backoff for connection attempts.
//!
//! Databases routinely come up after the services that depend on them,
//! so the connectors retry with a doubling delay instead of failing the
//! whole process on the first refused connection.

use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Backoff policy for [`retry_with_backoff`].
///
/// The delay starts at `initial_delay`, doubles per attempt, and is
/// capped at `max_delay`. With jitter enabled each pause is scaled to
/// somewhere between half and all of the computed delay.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt, so `max_retries: 3` means up to
    /// four attempts in total.
    pub max_retries: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
    pub use_jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(5),
            use_jitter: true,
        }
    }
}

/// Runs `operation` until it succeeds or the retry budget is spent.
///
/// Returns the last error once `config.max_retries` retries have been
/// used. Failures before that are logged at debug level together with
/// the pause before the next attempt.
///
/// # Example
/// ```ignore
/// use database::common::{RetryConfig, retry_with_backoff};
///
/// let db = retry_with_backoff(
///     || connect_from_config(&config),
///     RetryConfig::default(),
/// )
/// .await?;
/// ```
pub async fn retry_with_backoff<F, Fut, T, E>(mut operation: F, config: RetryConfig) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempts_left = config.max_retries;
    let mut delay = config.initial_delay;

    loop {
        match operation().await {
            Ok(value) => {
                let used = config.max_retries - attempts_left;
                if used > 0 {
                    debug!("Succeeded after {} retries", used);
                }
                return Ok(value);
            }
            Err(e) if attempts_left == 0 => {
                warn!(
                    "Giving up after {} attempts: {}",
                    config.max_retries + 1,
                    e
                );
                return Err(e);
            }
            Err(e) => {
                attempts_left -= 1;
                let pause = if config.use_jitter {
                    jittered(delay)
                } else {
                    delay
                };

                debug!(
                    "Attempt {} of {} failed: {}. Retrying in {:?}",
                    config.max_retries - attempts_left,
                    config.max_retries + 1,
                    e,
                    pause
                );

                tokio::time::sleep(pause).await;
                delay = (delay * 2).min(config.max_delay);
            }
        }
    }
}

/// Scales `delay` to somewhere in `[delay / 2, delay)` so simultaneous
/// restarts do not hammer the database in lockstep.
fn jittered(delay: Duration) -> Duration {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    // RandomState is randomly seeded per instance
    let noise = RandomState::new().hash_one(0u8) % 512;
    delay / 2 + delay.mul_f64(noise as f64 / 1024.0)
}
