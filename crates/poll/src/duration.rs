//! Unit-bearing durations
//!
//! Callers may express a poll interval or timeout in whatever units are
//! convenient (`{ seconds: 1.5 }`, `{ minutes: 2, seconds: 30 }`).
//! [`AnyDuration::to_duration`] normalizes them to a single [`Duration`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// A duration split across several units, each given as `f64`.
///
/// Components are summed. Unset components default to zero.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use warden_poll::AnyDuration;
///
/// let d = AnyDuration { seconds: 1.0, milliseconds: 500.0, ..AnyDuration::ZERO };
/// assert_eq!(d.to_duration().unwrap(), Duration::from_millis(1500));
///
/// assert_eq!(AnyDuration::from_minutes(0.5).to_duration().unwrap(), Duration::from_secs(30));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnyDuration {
    pub milliseconds: f64,
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
}

impl AnyDuration {
    pub const ZERO: Self = Self {
        milliseconds: 0.0,
        seconds: 0.0,
        minutes: 0.0,
        hours: 0.0,
    };

    #[must_use]
    pub const fn from_millis(milliseconds: f64) -> Self {
        Self {
            milliseconds,
            ..Self::ZERO
        }
    }

    #[must_use]
    pub const fn from_secs(seconds: f64) -> Self {
        Self {
            seconds,
            ..Self::ZERO
        }
    }

    #[must_use]
    pub const fn from_minutes(minutes: f64) -> Self {
        Self {
            minutes,
            ..Self::ZERO
        }
    }

    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self {
            hours,
            ..Self::ZERO
        }
    }

    /// Sums the components into a [`Duration`].
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidDuration`] when a component is negative, NaN
    /// or infinite, and [`ConfigError::DurationOverflow`] when the total
    /// does not fit.
    pub fn to_duration(&self) -> Result<Duration, ConfigError> {
        let parts = [
            ("milliseconds", self.milliseconds, 1.0),
            ("seconds", self.seconds, 1_000.0),
            ("minutes", self.minutes, 60_000.0),
            ("hours", self.hours, 3_600_000.0),
        ];

        let mut total_ms = 0.0;
        for (unit, value, ms_per_unit) in parts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDuration { unit, value });
            }
            total_ms += value * ms_per_unit;
        }

        Duration::try_from_secs_f64(total_ms / 1_000.0).map_err(|_| ConfigError::DurationOverflow)
    }
}

impl From<Duration> for AnyDuration {
    fn from(duration: Duration) -> Self {
        Self::from_secs(duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(AnyDuration::from_millis(250.0), Duration::from_millis(250))]
    #[case(AnyDuration::from_secs(2.0), Duration::from_secs(2))]
    #[case(AnyDuration::from_minutes(1.0), Duration::from_secs(60))]
    #[case(AnyDuration::from_hours(1.0), Duration::from_secs(3600))]
    #[case(AnyDuration::ZERO, Duration::ZERO)]
    fn test_single_unit(#[case] input: AnyDuration, #[case] expected: Duration) {
        assert_eq!(input.to_duration().unwrap(), expected);
    }

    #[test]
    fn test_components_sum() {
        let d = AnyDuration {
            minutes: 2.0,
            seconds: 30.0,
            ..AnyDuration::ZERO
        };
        assert_eq!(d.to_duration().unwrap(), Duration::from_secs(150));
    }

    #[rstest]
    #[case(AnyDuration::from_secs(-1.0), "seconds")]
    #[case(AnyDuration::from_millis(f64::NAN), "milliseconds")]
    #[case(AnyDuration::from_hours(f64::INFINITY), "hours")]
    fn test_invalid_component(#[case] input: AnyDuration, #[case] expected_unit: &str) {
        match input.to_duration() {
            Err(ConfigError::InvalidDuration { unit, .. }) => assert_eq!(unit, expected_unit),
            other => panic!("expected InvalidDuration, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            AnyDuration::from_hours(f64::MAX / 4000.0).to_duration(),
            Err(ConfigError::DurationOverflow)
        );
    }

    #[test]
    fn test_from_duration() {
        let d = AnyDuration::from(Duration::from_millis(1500));
        assert_eq!(d.to_duration().unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_deserialize_partial() {
        let d: AnyDuration = serde_json::from_str(r#"{ "seconds": 5 }"#).unwrap();
        assert_eq!(d, AnyDuration::from_secs(5.0));
    }
}
