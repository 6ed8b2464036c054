//! Poll configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration::AnyDuration;
use crate::error::ConfigError;

/// Default pause between attempts.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// Default overall time budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable overriding the interval, in milliseconds.
pub const ENV_INTERVAL_MS: &str = "WARDEN_POLL_INTERVAL_MS";

/// Environment variable overriding the timeout, in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "WARDEN_POLL_TIMEOUT_MS";

/// Interval and timeout for one polling session.
///
/// A timeout shorter than the interval is accepted: the poll makes a single
/// attempt and fails if it does not pass.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use warden_poll::PollConfig;
///
/// let config = PollConfig::default().with_timeout(Duration::from_secs(30));
/// assert_eq!(config.interval, Duration::from_millis(100));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollConfig {
    /// Pause after each failed attempt.
    #[cfg_attr(feature = "humantime", serde(with = "humantime_serde"))]
    pub interval: Duration,

    /// Budget measured from the first attempt.
    #[cfg_attr(feature = "humantime", serde(with = "humantime_serde"))]
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PollConfig {
    /// Creates a configuration from an interval and a timeout.
    pub const fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Short settings for tests: 2 ms interval, 1 s timeout.
    pub const fn fast() -> Self {
        Self::new(Duration::from_millis(2), Duration::from_secs(1))
    }

    /// Builds a validated configuration from unit-bearing durations.
    pub fn from_parts(interval: AnyDuration, timeout: AnyDuration) -> Result<Self, ConfigError> {
        let config = Self::new(interval.to_duration()?, timeout.to_duration()?);
        config.validate()?;
        Ok(config)
    }

    /// Reads overrides from [`ENV_INTERVAL_MS`] and [`ENV_TIMEOUT_MS`],
    /// keeping the default for any variable that is unset.
    pub fn from_env_or_default() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env_or_default`](Self::from_env_or_default) with a custom
    /// variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = read_millis(&lookup, ENV_INTERVAL_MS)? {
            config.interval = ms;
        }
        if let Some(ms) = read_millis(&lookup, ENV_TIMEOUT_MS)? {
            config.timeout = ms;
        }

        config.validate()?;
        Ok(config)
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use = "builder methods must be chained or built"]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Rejects a zero interval or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }
}

fn read_millis<F>(lookup: &F, name: &'static str) -> Result<Option<Duration>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<u64>()
        .map(|ms| Some(Duration::from_millis(ms)))
        .map_err(|_| ConfigError::Env { name, value: raw })
}
