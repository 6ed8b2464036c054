//! The retry-until-condition loop
//!
//! Each call is an independent session: it records its own start time and
//! its own last failure, and shares nothing with other calls.
//!
//! ```text
//! start ──► invoke callback ──► predicate passes? ──yes──► Ok(value)
//!                ▲                     │ no
//!                │                     ▼
//!                │              record last error
//!                │                     │
//!                │              sleep(interval)
//!                │                     │
//!                └──── no ──── elapsed >= timeout? ──yes──► Err(Timeout)
//! ```
//!
//! Attempts never overlap. An in-flight callback is bounded by the time
//! left in the budget, so a callback that never completes cannot hold the
//! poll past its timeout.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::future;

use tokio::time::{Instant, sleep, timeout};
use tracing::{Instrument, debug, debug_span, trace, warn};
use warden_guard::foundation::Predicate;

use crate::config::PollConfig;
use crate::error::{AttemptError, PollError, PollResult};
use crate::outcome::PollOutcome;

/// Polls `callback` until its value satisfies `predicate` or the timeout
/// elapses.
///
/// Returns the value produced by the passing attempt, not the expectation
/// held by the predicate. On timeout the error carries `message`, the
/// configured timeout and the last attempt's failure.
///
/// # Errors
///
/// [`PollError::Config`] when `config` is invalid (the callback is never
/// invoked), [`PollError::Timeout`] when no attempt passes in time.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use warden_guard::predicates::ends_with_item;
/// use warden_poll::{PollConfig, wait_until};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let steps = wait_until(
///     &ends_with_item("two"),
///     || async { Ok::<_, Infallible>(vec!["one", "two"]) },
///     &PollConfig::fast(),
///     None,
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(steps, vec!["one", "two"]);
/// # }
/// ```
pub async fn wait_until<P, T, E, F, Fut>(
    predicate: &P,
    callback: F,
    config: &PollConfig,
    message: Option<&str>,
) -> PollResult<T>
where
    P: Predicate + ?Sized,
    T: Borrow<P::Input>,
    E: fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    config.validate()?;

    let span = debug_span!(
        "wait_until",
        predicate = predicate.name(),
        timeout = ?config.timeout,
        interval = ?config.interval,
    );

    poll_loop(predicate, callback, config, message)
        .instrument(span)
        .await
}

/// [`wait_until`] for a synchronous callback.
///
/// The pause between attempts is still a non-blocking tokio sleep, so this
/// must run inside a tokio runtime.
pub async fn wait_until_sync<P, T, E, F>(
    predicate: &P,
    mut callback: F,
    config: &PollConfig,
    message: Option<&str>,
) -> PollResult<T>
where
    P: Predicate + ?Sized,
    T: Borrow<P::Input>,
    E: fmt::Display,
    F: FnMut() -> Result<T, E>,
{
    wait_until(predicate, || future::ready(callback()), config, message).await
}

async fn poll_loop<P, T, E, F, Fut>(
    predicate: &P,
    mut callback: F,
    config: &PollConfig,
    message: Option<&str>,
) -> PollResult<T>
where
    P: Predicate + ?Sized,
    T: Borrow<P::Input>,
    E: fmt::Display,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let start = Instant::now();
    let mut attempts: u32 = 0;
    let mut last_error = AttemptError::NoResult;

    loop {
        attempts = attempts.saturating_add(1);
        let remaining = config.timeout.saturating_sub(start.elapsed());

        match timeout(remaining, callback()).await {
            Ok(Ok(value)) => match predicate.evaluate(<T as Borrow<P::Input>>::borrow(&value)) {
                Ok(()) => {
                    debug!(attempts, elapsed = ?start.elapsed(), "condition satisfied");
                    return Ok(value);
                }
                Err(mismatch) => {
                    trace!(attempt = attempts, error = %mismatch, "condition not satisfied");
                    last_error = AttemptError::Mismatch(mismatch);
                }
            },
            Ok(Err(error)) => {
                trace!(attempt = attempts, error = %error, "callback failed");
                last_error = AttemptError::Callback(error.to_string());
            }
            Err(_) => {
                trace!(attempt = attempts, "callback did not complete within the budget");
                break;
            }
        }

        sleep(config.interval).await;

        if start.elapsed() >= config.timeout {
            break;
        }
    }

    warn!(
        attempts,
        timeout = ?config.timeout,
        last_error = %last_error,
        "poll timed out"
    );

    Err(PollError::Timeout {
        timeout: config.timeout,
        attempts,
        message: message.map(str::to_owned),
        last_error,
    })
}

/// A reusable poll configuration with an optional failure message.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use std::time::Duration;
/// use warden_guard::predicates::at_least;
/// use warden_poll::{PollConfig, Poller};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let poller = Poller::new(PollConfig::fast().with_timeout(Duration::from_millis(20)))
///     .with_message("replicas ready");
///
/// let error = poller
///     .poll_sync(&at_least(3), || Ok::<_, Infallible>(1))
///     .await
///     .unwrap_err();
///
/// assert!(error.to_string().starts_with("replicas ready: timed out after 20ms"));
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Poller {
    config: PollConfig,
    message: Option<Cow<'static, str>>,
}

impl Poller {
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            message: None,
        }
    }

    /// Sets the message prepended to timeout errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn config(&self) -> &PollConfig {
        &self.config
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// See [`wait_until`].
    pub async fn poll<P, T, E, F, Fut>(&self, predicate: &P, callback: F) -> PollResult<T>
    where
        P: Predicate + ?Sized,
        T: Borrow<P::Input>,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        wait_until(predicate, callback, &self.config, self.message()).await
    }

    /// See [`wait_until_sync`].
    pub async fn poll_sync<P, T, E, F>(&self, predicate: &P, callback: F) -> PollResult<T>
    where
        P: Predicate + ?Sized,
        T: Borrow<P::Input>,
        E: fmt::Display,
        F: FnMut() -> Result<T, E>,
    {
        wait_until_sync(predicate, callback, &self.config, self.message()).await
    }

    /// Like [`poll`](Self::poll), returning a [`PollOutcome`].
    pub async fn poll_outcome<P, T, E, F, Fut>(&self, predicate: &P, callback: F) -> PollOutcome<T>
    where
        P: Predicate + ?Sized,
        T: Borrow<P::Input>,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.poll(predicate, callback).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::convert::Infallible;
    use std::time::Duration;
    use warden_guard::predicates::{at_least, equals};

    #[tokio::test(start_paused = true)]
    async fn test_first_attempt_is_immediate() {
        let start = Instant::now();
        let value = wait_until_sync(
            &equals(7),
            || Ok::<_, Infallible>(7),
            &PollConfig::default(),
            None,
        )
        .await
        .unwrap();

        assert_eq!(value, 7);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attempts_are_spaced_by_interval() {
        let calls = Cell::new(0u32);
        let start = Instant::now();

        let value = wait_until_sync(
            &at_least(4),
            || {
                calls.set(calls.get() + 1);
                Ok::<_, Infallible>(calls.get())
            },
            &PollConfig::new(Duration::from_millis(10), Duration::from_secs(1)),
            None,
        )
        .await
        .unwrap();

        assert_eq!(value, 4);
        assert_eq!(start.elapsed(), Duration::from_millis(30));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_counts_attempts() {
        let config = PollConfig::new(Duration::from_millis(2), Duration::from_millis(20));
        let error = wait_until_sync(&at_least(3), || Ok::<_, Infallible>(0), &config, None)
            .await
            .unwrap_err();

        // attempts at 0, 2, .., 18 ms
        assert_eq!(error.attempts(), Some(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_config_skips_callback() {
        let calls = Cell::new(0u32);
        let config = PollConfig::fast().with_timeout(Duration::ZERO);

        let error = wait_until_sync(
            &equals(1),
            || {
                calls.set(calls.get() + 1);
                Ok::<_, Infallible>(1)
            },
            &config,
            None,
        )
        .await
        .unwrap_err();

        assert_eq!(error, PollError::Config(ConfigError::ZeroTimeout));
        assert_eq!(calls.get(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_shorter_than_interval_makes_one_attempt() {
        let calls = Cell::new(0u32);
        let config = PollConfig::new(Duration::from_millis(50), Duration::from_millis(5));

        let error = wait_until_sync(
            &equals(1),
            || {
                calls.set(calls.get() + 1);
                Ok::<_, Infallible>(0)
            },
            &config,
            None,
        )
        .await
        .unwrap_err();

        assert!(error.is_timeout());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_poller_carries_message() {
        let poller = Poller::new(PollConfig::new(
            Duration::from_millis(1),
            Duration::from_millis(5),
        ))
        .with_message("cache warm");

        let error = poller
            .poll(&equals(true), || async { Ok::<_, Infallible>(false) })
            .await
            .unwrap_err();

        assert!(error.to_string().starts_with("cache warm: timed out after 5ms: equals:"));
    }
}
