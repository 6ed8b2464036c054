//! `wait_until` as a method on [`Guard`]

use std::borrow::Borrow;
use std::fmt;

use warden_guard::foundation::Predicate;
use warden_guard::guard::Guard;

use crate::config::PollConfig;
use crate::error::PollResult;
use crate::poller::{wait_until, wait_until_sync};

/// Adds the retrying flavor to [`Guard`], reusing the guard's message.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use warden_guard::guard::Guard;
/// use warden_guard::predicates::starts_with;
/// use warden_poll::{PollConfig, WaitUntil};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let guard = Guard::new(starts_with("HTTP/1.1 200")).with_message("health check");
/// let status = guard
///     .wait_until_sync(|| Ok::<_, Infallible>(String::from("HTTP/1.1 200 OK")), &PollConfig::fast())
///     .await
///     .unwrap();
/// assert_eq!(status, "HTTP/1.1 200 OK");
/// # }
/// ```
pub trait WaitUntil {
    type Input: ?Sized;

    /// See [`wait_until`](crate::wait_until).
    fn wait_until<T, E, F, Fut>(
        &self,
        callback: F,
        config: &PollConfig,
    ) -> impl Future<Output = PollResult<T>>
    where
        T: Borrow<Self::Input>,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>;

    /// See [`wait_until_sync`](crate::wait_until_sync).
    fn wait_until_sync<T, E, F>(
        &self,
        callback: F,
        config: &PollConfig,
    ) -> impl Future<Output = PollResult<T>>
    where
        T: Borrow<Self::Input>,
        E: fmt::Display,
        F: FnMut() -> Result<T, E>;
}

impl<P: Predicate> WaitUntil for Guard<P> {
    type Input = P::Input;

    fn wait_until<T, E, F, Fut>(
        &self,
        callback: F,
        config: &PollConfig,
    ) -> impl Future<Output = PollResult<T>>
    where
        T: Borrow<Self::Input>,
        E: fmt::Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        wait_until(self.predicate(), callback, config, self.message())
    }

    fn wait_until_sync<T, E, F>(
        &self,
        callback: F,
        config: &PollConfig,
    ) -> impl Future<Output = PollResult<T>>
    where
        T: Borrow<Self::Input>,
        E: fmt::Display,
        F: FnMut() -> Result<T, E>,
    {
        wait_until_sync(self.predicate(), callback, config, self.message())
    }
}
