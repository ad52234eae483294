// SPDX-License-Identifier: MPL-2.0
//! Time source for timed UI state.
//!
//! Timed state (the carousel animation lock) stores deadlines and compares them
//! against a [`Clock`] instead of arming real timers, so hosts supply their
//! own notion of "now" and tests advance time by hand.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Monotonic time elapsed since an arbitrary, fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the page
/// owns another.
///
/// # Example
///
/// ```
/// use pagewire::clock::{Clock, ManualClock};
/// use std::time::Duration;
///
/// let clock = ManualClock::default();
/// let observer = clock.clone();
/// clock.advance(Duration::from_millis(420));
/// assert_eq!(observer.now(), Duration::from_millis(420));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_origin() {
        assert_eq!(ManualClock::default().now(), Duration::ZERO);
    }

    #[test]
    fn clones_share_time() {
        let clock = ManualClock::default();
        let other = clock.clone();
        other.advance(Duration::from_millis(100));
        clock.advance(Duration::from_millis(20));
        assert_eq!(clock.now(), Duration::from_millis(120));
        clock.set(Duration::from_secs(1));
        assert_eq!(other.now(), Duration::from_secs(1));
    }
}
