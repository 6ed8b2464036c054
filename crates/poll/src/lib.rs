//! # warden-poll
//!
//! Retry-until-condition polling built on `warden-guard` predicates.
//!
//! A callback is invoked repeatedly, on a fixed interval, until the value
//! it produces satisfies a predicate or the timeout elapses. The retry
//! mechanism and the "did it pass" decision are fully decoupled: any
//! [`Predicate`](warden_guard::foundation::Predicate) plugs in.
//!
//! ```rust
//! use std::convert::Infallible;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use warden_guard::predicates::at_least;
//! use warden_poll::{PollConfig, wait_until};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let counter = AtomicU32::new(0);
//!
//! let value = wait_until(
//!     &at_least(3),
//!     || {
//!         let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
//!         async move { Ok::<_, Infallible>(n) }
//!     },
//!     &PollConfig::fast(),
//!     Some("counter"),
//! )
//! .await
//! .unwrap();
//!
//! assert_eq!(value, 3);
//! # }
//! ```
//!
//! Failures of individual attempts, whether a predicate mismatch or a
//! callback error, are recorded and retried. Only the final
//! [`PollError::Timeout`] (carrying the last failure) or an up-front
//! [`PollError::Config`] reaches the caller.

mod config;
mod duration;
mod error;
mod guard_ext;
mod outcome;
mod poller;

pub use config::{DEFAULT_INTERVAL, DEFAULT_TIMEOUT, ENV_INTERVAL_MS, ENV_TIMEOUT_MS, PollConfig};
pub use duration::AnyDuration;
pub use error::{AttemptError, ConfigError, PollError, PollResult};
pub use guard_ext::WaitUntil;
pub use outcome::PollOutcome;
pub use poller::{Poller, wait_until, wait_until_sync};
