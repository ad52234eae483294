// SPDX-License-Identifier: MPL-2.0
//! Animation lock for smooth-scroll requests.
//!
//! Native smooth scrolling gives no reliable completion signal, so a carousel
//! assumes the animation runs for a fixed duration and ignores new requests
//! until then. The lock is a two-state machine keyed on a deadline; it never
//! arms a timer of its own.

use crate::domain::ui::LockDuration;
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AnimationLock {
    /// Ready to accept a scroll request.
    #[default]
    Idle,
    /// A scroll was started; requests before `until` are dropped.
    CoolingDown { until: Duration },
}

impl AnimationLock {
    /// Whether a request arriving at `now` must be dropped.
    #[must_use]
    pub fn is_held(&self, now: Duration) -> bool {
        matches!(self, Self::CoolingDown { until } if now < *until)
    }

    /// Takes the lock for `duration` starting at `now`.
    ///
    /// Returns `false` without touching the deadline while the lock is held.
    /// An expired deadline is replaced, never extended.
    pub fn try_acquire(&mut self, now: Duration, duration: LockDuration) -> bool {
        if self.is_held(now) {
            return false;
        }
        *self = Self::CoolingDown {
            until: now + duration.as_duration(),
        };
        true
    }

    /// Releases the lock early (the scroll reported completion).
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    /// Collapses an expired deadline back to `Idle`.
    pub fn expire(&mut self, now: Duration) {
        if matches!(self, Self::CoolingDown { until } if now >= *until) {
            *self = Self::Idle;
        }
    }
}
