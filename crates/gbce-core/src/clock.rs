//! Time source abstraction.
//!
//! Windowed calculations read the current instant through [`Clock`] so that
//! tests can pin "now" with a [`FixedClock`] instead of sleeping.

use chrono::{DateTime, Duration, Utc};

/// A source of the current instant.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a chosen instant.
///
/// # Example
///
/// ```rust
/// use chrono::{Duration, TimeZone, Utc};
/// use gbce_core::clock::{Clock, FixedClock};
///
/// let start = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
/// let mut clock = FixedClock::new(start);
/// clock.advance(Duration::minutes(15));
/// assert_eq!(clock.now(), start + Duration::minutes(15));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Moves the clock to `instant`.
    pub fn set(&mut self, instant: DateTime<Utc>) {
        self.instant = instant;
    }

    /// Moves the clock forward (or backward, for a negative duration).
    pub fn advance(&mut self, by: Duration) {
        self.instant += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_is_frozen() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_fixed_clock_set_and_advance() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let mut clock = FixedClock::new(instant);

        clock.advance(Duration::seconds(90));
        assert_eq!(clock.now(), instant + Duration::seconds(90));

        clock.set(instant);
        assert_eq!(clock.now(), instant);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_clock_through_references() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = FixedClock::new(instant);
        let boxed: Box<dyn Clock> = Box::new(clock);
        assert_eq!((&clock).now(), instant);
        assert_eq!(boxed.now(), instant);
    }
}
