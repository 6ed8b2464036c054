//! # warden-log
//!
//! Subscriber setup for binaries and tests that use the warden crates.
//! The library crates only emit `tracing` events; this crate decides where
//! they go.
//!
//! ## Quick Start
//!
//! ```rust
//! fn main() -> warden_log::LogResult<()> {
//!     // WARDEN_LOG / RUST_LOG if set, otherwise a debug or release preset
//!     let _guard = warden_log::auto_init()?;
//!
//!     warden_log::info!(interval_ms = 100, "polling started");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment
//!
//! | variable             | effect                                   |
//! |----------------------|------------------------------------------|
//! | `WARDEN_LOG`         | filter directives, preferred over below  |
//! | `RUST_LOG`           | filter directives                        |
//! | `WARDEN_LOG_FORMAT`  | `pretty`, `compact` or `json`            |
//! | `WARDEN_LOG_TIME`    | `0`/`false` hides timestamps             |
//! | `WARDEN_LOG_SOURCE`  | `0`/`false` hides file and line          |
//! | `WARDEN_LOG_COLORS`  | `0`/`false` disables ANSI colors         |

mod builder;
mod config;
mod error;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, ENV_LOG, ENV_LOG_FORMAT, Format, Writer};
pub use error::{LogError, LogResult};

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Auto-detect and initialize the best logging configuration
pub fn auto_init() -> LogResult<LoggerGuard> {
    if std::env::var(ENV_LOG).is_ok() || std::env::var("RUST_LOG").is_ok() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Initialize with default configuration
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}

/// Initialize for tests.
///
/// Safe to call from every test: when a subscriber is already installed
/// (by an earlier test or another thread) a no-op guard is returned.
pub fn init_test() -> LoggerGuard {
    if tracing::dispatcher::has_been_set() {
        return LoggerGuard::noop();
    }
    init_with(Config::test()).unwrap_or_else(|_| LoggerGuard::noop())
}
